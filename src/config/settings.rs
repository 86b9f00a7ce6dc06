// Configuration structs

use std::path::PathBuf;

/// Runtime configuration for a solve run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ollama model identifier
    pub model: String,

    /// Base URL of the Ollama server
    pub ollama_url: String,

    /// Learning rate for the attempt value recurrence
    pub learning_rate: f64,

    /// Discount factor for the attempt value recurrence
    pub discount_factor: f64,

    /// Maximum number of attempts before returning the best solution
    pub max_attempts: usize,

    /// Number of perspectives generated per attempt
    pub perspective_count: usize,

    /// Path to the persisted attempt value table
    pub memory_path: PathBuf,

    /// Path to the capability registry JSON
    pub tools_registry_path: PathBuf,

    /// Directory for attempt metrics storage
    pub metrics_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

        Self {
            model: "deepseek-r1".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            learning_rate: 0.7,
            discount_factor: 0.9,
            max_attempts: 3,
            perspective_count: 3,
            memory_path: home.join(".mockingbird").join("q_memory.json"),
            tools_registry_path: PathBuf::from("tools_registry.json"),
            metrics_dir: home.join(".mockingbird").join("metrics"),
        }
    }
}

impl Config {
    /// Validate configuration and return helpful errors
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.ollama_url.contains("://") {
            anyhow::bail!(
                "Invalid Ollama URL: '{}'\n\
                 Expected a full URL, e.g. http://localhost:11434",
                self.ollama_url
            );
        }

        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            anyhow::bail!(
                "learning_rate ({}) must be in (0.0, 1.0]",
                self.learning_rate
            );
        }

        if !(0.0..=1.0).contains(&self.discount_factor) {
            anyhow::bail!(
                "discount_factor ({}) must be in [0.0, 1.0]",
                self.discount_factor
            );
        }

        if self.max_attempts == 0 {
            anyhow::bail!("max_attempts must be greater than 0");
        }

        if self.max_attempts > 50 {
            anyhow::bail!(
                "max_attempts ({}) is unreasonably high\n\
                 Each attempt issues several generation calls; recommended range: 1-10",
                self.max_attempts
            );
        }

        if self.perspective_count == 0 {
            anyhow::bail!("perspective_count must be greater than 0");
        }

        if self.perspective_count > 10 {
            anyhow::bail!(
                "perspective_count ({}) is unreasonably high\n\
                 Recommended range: 2-5",
                self.perspective_count
            );
        }

        Ok(())
    }
}
