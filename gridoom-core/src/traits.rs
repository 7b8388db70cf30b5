use async_trait::async_trait;

use crate::types::{CellGrid, StreamFrame};

#[async_trait]
pub trait FrameProcessor {
    async fn process(&mut self, frame_data: StreamFrame) -> Option<StreamFrame>;
}

/// Boundary towards the host display. The host owns resizing its visual
/// region to the grid's dimensions and recoloring each addressed cell;
/// implementations here only deliver values per refresh cycle.
pub trait DisplaySink: Send {
    fn status(&mut self, message: &str);

    fn paint(&mut self, grid: &CellGrid);
}
