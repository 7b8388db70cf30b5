use tokio::sync::mpsc::UnboundedSender;

use crate::types::StreamFrame;

pub struct PipelineFeeder {
    sender: UnboundedSender<StreamFrame>,
}

impl PipelineFeeder {
    pub fn new(sender: UnboundedSender<StreamFrame>) -> Self {
        Self { sender }
    }

    pub fn feed(&self, frame_data: StreamFrame) {
        self.sender.send(frame_data).unwrap();
    }
}
