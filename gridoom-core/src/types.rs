use std::{collections::HashMap, fmt::Display};

use bytes::Bytes;

use crate::error::DropReason;

/// Channels per pixel in a raw frame (red, green, blue).
pub const CHANNELS: usize = 3;

/// A raw engine frame: row-major RGB, one byte per channel.
///
/// Frames are replaced wholesale on every publish; the shared `Bytes`
/// storage makes clones reference bumps rather than pixel copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFrame {
    width: u32,
    height: u32,
    data: Bytes,
}

impl RawFrame {
    pub fn new(width: u32, height: u32, data: Bytes) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * CHANNELS);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn rgb_at(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let base = (y as usize * self.width as usize + x as usize) * CHANNELS;
        (self.data[base], self.data[base + 1], self.data[base + 2])
    }
}

/// A display-ready grid of packed color cells.
///
/// Each cell holds `(blue << 16) | (green << 8) | red`, the host display's
/// native channel order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    width: u32,
    height: u32,
    cells: Vec<u32>,
}

impl CellGrid {
    pub fn new(width: u32, height: u32, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell(&self, x: u32, y: u32) -> u32 {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

/// The DTO flowing through pipelines: frame slots plus per-frame stats.
#[derive(Default, Clone, Debug)]
pub struct StreamFrame {
    raw: Option<RawFrame>,
    grid: Option<CellGrid>,

    stats: HashMap<String, u128>,

    drop_reason: Option<DropReason>,
}

impl StreamFrame {
    //*******//
    // Stats //
    //*******//

    pub fn set(&mut self, key: &str, value: u128) {
        self.stats.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> u128 {
        *self
            .stats
            .get(key)
            .unwrap_or_else(|| panic!("Missing stat '{}'", key))
    }

    pub fn has(&self, key: &str) -> bool {
        self.stats.contains_key(key)
    }

    pub fn stats(&self) -> &HashMap<String, u128> {
        &self.stats
    }

    //*************//
    // Frame slots //
    //*************//

    pub fn set_raw(&mut self, frame: RawFrame) {
        self.raw = Some(frame);
    }

    pub fn raw(&self) -> Option<&RawFrame> {
        self.raw.as_ref()
    }

    pub fn take_raw(&mut self) -> Option<RawFrame> {
        self.raw.take()
    }

    pub fn set_grid(&mut self, grid: CellGrid) {
        self.grid = Some(grid);
    }

    pub fn grid(&self) -> Option<&CellGrid> {
        self.grid.as_ref()
    }

    pub fn take_grid(&mut self) -> Option<CellGrid> {
        self.grid.take()
    }

    //*************//
    // Drop reason //
    //*************//

    pub fn set_drop_reason(&mut self, reason: Option<DropReason>) {
        self.drop_reason = reason;
    }

    pub fn drop_reason(&self) -> Option<DropReason> {
        self.drop_reason
    }

    //*******//
    // Other //
    //*******//

    pub fn clone_without_frames(&self) -> Self {
        Self {
            stats: self.stats.clone(),
            drop_reason: self.drop_reason,

            ..Default::default()
        }
    }
}

impl Display for StreamFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ Raw frame: {:?}, Cell grid: {:?}, Stats: {:?}, Drop reason: {:?} }}",
            self.raw.as_ref().map(|frame| (frame.width, frame.height)),
            self.grid.as_ref().map(|grid| (grid.width, grid.height)),
            self.stats,
            self.drop_reason
        )
    }
}
