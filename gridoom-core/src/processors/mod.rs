pub mod functional;
pub mod stats;
pub mod ticker;
pub mod time;

pub use functional::Function;
pub use stats::ConsoleAverageStatsLogger;
pub use ticker::Ticker;
pub use time::{TimestampAdder, TimestampDiffCalculator};
