use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::info;

use crate::{traits::FrameProcessor, types::StreamFrame};

/// Logs the average of selected stats over the frames of the last round.
pub struct ConsoleAverageStatsLogger {
    header: Option<String>,
    values_to_log: Vec<String>,
    round_duration: Duration,

    current_round_start: Instant,

    logged_frames: Vec<StreamFrame>,
}

impl Default for ConsoleAverageStatsLogger {
    fn default() -> Self {
        Self {
            header: None,
            values_to_log: Vec::new(),
            round_duration: Duration::from_secs(1),
            current_round_start: Instant::now(),
            logged_frames: Vec::new(),
        }
    }
}

impl ConsoleAverageStatsLogger {
    pub fn new() -> Self {
        Self::default()
    }

    // Building functions
    pub fn header(mut self, header: &str) -> Self {
        self.header = Some(header.to_string());
        self
    }

    pub fn log(mut self, value: &str) -> Self {
        self.values_to_log.push(value.to_string());
        self
    }

    pub fn round_duration(mut self, round_duration: Duration) -> Self {
        self.round_duration = round_duration;
        self
    }

    // Logging functions
    fn print_round_stats(&self) {
        if let Some(header) = self.header.as_ref() {
            info!("{}", header);
        }

        let logged_frames_count = self.logged_frames.len() as u128;

        if logged_frames_count == 0 {
            info!("No frames logged during this round");
            return;
        }

        info!("Logged frames: {}", logged_frames_count);

        self.values_to_log.iter().for_each(|value| {
            let avg = self
                .logged_frames
                .iter()
                .map(|frame| frame.get(value))
                .sum::<u128>()
                / logged_frames_count;

            info!("Average {}: {}", value, avg);
        });
    }

    fn reset_round(&mut self) {
        self.logged_frames.clear();
        self.current_round_start = Instant::now();
    }
}

#[async_trait]
impl FrameProcessor for ConsoleAverageStatsLogger {
    async fn process(&mut self, frame_data: StreamFrame) -> Option<StreamFrame> {
        if frame_data.drop_reason().is_none() {
            self.logged_frames.push(frame_data.clone_without_frames());
        }

        if self.current_round_start.elapsed() > self.round_duration {
            self.print_round_stats();
            self.reset_round();
        }

        Some(frame_data)
    }
}
