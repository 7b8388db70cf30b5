use async_trait::async_trait;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::{
    error::DropReason,
    pipeline::{Component, Pipeline},
    processors::{Function, TimestampAdder, TimestampDiffCalculator},
    traits::FrameProcessor,
    types::StreamFrame,
};

struct Collector {
    sender: UnboundedSender<StreamFrame>,
}

#[async_trait]
impl FrameProcessor for Collector {
    async fn process(&mut self, frame_data: StreamFrame) -> Option<StreamFrame> {
        self.sender.send(frame_data).unwrap();
        None
    }
}

#[test]
fn stream_frame_stats_roundtrip() {
    let mut frame_data = StreamFrame::default();
    assert!(!frame_data.has("capture_timestamp"));

    frame_data.set("capture_timestamp", 42);
    assert!(frame_data.has("capture_timestamp"));
    assert_eq!(frame_data.get("capture_timestamp"), 42);
}

#[test]
fn stats_survive_a_frameless_clone() {
    let mut frame_data = StreamFrame::default();
    frame_data.set("paint_delay", 7);
    frame_data.set_drop_reason(Some(DropReason::NoRawFrame));

    let clone = frame_data.clone_without_frames();
    assert_eq!(clone.get("paint_delay"), 7);
    assert_eq!(clone.drop_reason(), Some(DropReason::NoRawFrame));
    assert!(clone.raw().is_none());
    assert!(clone.grid().is_none());
}

#[tokio::test]
async fn pipeline_forwards_fed_frames_through_every_component() {
    let (sender, mut receiver) = mpsc::unbounded_channel();

    let pipeline = Pipeline::new()
        .tag("test")
        .link(Component::new().append(Function::new(|mut frame_data| {
            frame_data.set("touched", 1);
            Some(frame_data)
        })))
        .link(Component::new().append(Collector { sender }))
        .feedable()
        .bind();

    let feeder = pipeline.get_feeder();
    let handles = pipeline.run();

    for _ in 0..3 {
        feeder.feed(StreamFrame::default());
    }

    for _ in 0..3 {
        let frame_data = receiver.recv().await.unwrap();
        assert_eq!(frame_data.get("touched"), 1);
    }

    for handle in handles {
        handle.abort();
    }
}

#[tokio::test]
async fn dropped_frames_do_not_reach_downstream_components() {
    let (sender, mut receiver) = mpsc::unbounded_channel();

    let pipeline = Pipeline::new()
        .tag("drop-test")
        .link(Component::new().append(Function::new(|frame_data| {
            if frame_data.has("keep") {
                Some(frame_data)
            } else {
                None
            }
        })))
        .link(Component::new().append(Collector { sender }))
        .feedable()
        .bind();

    let feeder = pipeline.get_feeder();
    let handles = pipeline.run();

    feeder.feed(StreamFrame::default());
    let mut kept = StreamFrame::default();
    kept.set("keep", 1);
    feeder.feed(kept);

    let frame_data = receiver.recv().await.unwrap();
    assert!(frame_data.has("keep"));

    for handle in handles {
        handle.abort();
    }
}

#[tokio::test]
async fn timestamp_diff_measures_elapsed_time() {
    let mut adder = TimestampAdder::new("start");
    let mut differ = TimestampDiffCalculator::new("start", "elapsed");

    let frame_data = adder.process(StreamFrame::default()).await.unwrap();
    let frame_data = differ.process(frame_data).await.unwrap();

    assert!(frame_data.get("elapsed") < 1_000);
}
