use async_trait::async_trait;

use crate::{traits::FrameProcessor, types::StreamFrame};

pub struct Function {
    function: fn(StreamFrame) -> Option<StreamFrame>,
}

impl Function {
    pub fn new(function: fn(StreamFrame) -> Option<StreamFrame>) -> Self {
        Self { function }
    }
}

#[async_trait]
impl FrameProcessor for Function {
    async fn process(&mut self, frame_data: StreamFrame) -> Option<StreamFrame> {
        (self.function)(frame_data)
    }
}
