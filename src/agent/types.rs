// Debate loop types

/// Tunables for the attempt loop.
#[derive(Debug, Clone)]
pub struct DebateConfig {
    /// Learning rate for the attempt value recurrence
    pub learning_rate: f64,
    /// Discount factor for the attempt value recurrence
    pub discount_factor: f64,
    /// Maximum number of attempts before returning the best solution
    pub max_attempts: usize,
    /// Number of perspectives generated per attempt
    pub perspective_count: usize,
    /// Model identifier recorded in metrics
    pub model: String,
}

impl Default for DebateConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.7,
            discount_factor: 0.9,
            max_attempts: 3,
            perspective_count: 3,
            model: "deepseek-r1".to_string(),
        }
    }
}

/// One scored attempt, kept for reporting.
#[derive(Debug, Clone)]
pub struct AttemptOutcome {
    /// Zero-based attempt ordinal
    pub attempt: usize,
    /// Clamped quality score for this attempt's solution
    pub score: f64,
    /// Value estimate after the recurrence
    pub value: f64,
}

/// Result returned from `DebateAgent::solve`.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The returned solution text. On early exit this is the triggering
    /// attempt's solution; on exhaustion it is the best-scoring one.
    pub solution: String,
    /// Score of the returned solution
    pub score: f64,
    /// Whether the run ended by clearing the threshold
    pub early_exit: bool,
    /// Per-attempt scores in execution order
    pub attempts: Vec<AttemptOutcome>,
}
