// Attempt metrics

mod logger;
mod types;

pub use logger::MetricsLogger;
pub use types::AttemptMetric;
