// Metric record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line per scored attempt in the daily JSONL log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptMetric {
    pub timestamp: DateTime<Utc>,

    /// SHA256 of the problem statement; the statement itself is not logged.
    pub problem_hash: String,

    /// Zero-based attempt ordinal within the run.
    pub attempt: usize,

    pub score: f64,

    /// Value estimate after applying the recurrence.
    pub value: f64,

    pub model: String,

    pub early_exit: bool,
}
