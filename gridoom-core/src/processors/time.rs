use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

use crate::{traits::FrameProcessor, types::StreamFrame};

/// Milliseconds since the UNIX epoch.
pub fn now_timestamp() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis()
}

pub struct TimestampAdder {
    id: String,
}

impl TimestampAdder {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

#[async_trait]
impl FrameProcessor for TimestampAdder {
    async fn process(&mut self, mut frame_data: StreamFrame) -> Option<StreamFrame> {
        frame_data.set(&self.id, now_timestamp());
        Some(frame_data)
    }
}

pub struct TimestampDiffCalculator {
    source_id: String,
    diff_id: String,
}

impl TimestampDiffCalculator {
    pub fn new(source_id: &str, diff_id: &str) -> Self {
        Self {
            source_id: source_id.to_string(),
            diff_id: diff_id.to_string(),
        }
    }
}

#[async_trait]
impl FrameProcessor for TimestampDiffCalculator {
    async fn process(&mut self, mut frame_data: StreamFrame) -> Option<StreamFrame> {
        let source_timestamp = frame_data.get(&self.source_id);
        frame_data.set(&self.diff_id, now_timestamp() - source_timestamp);
        Some(frame_data)
    }
}
