// Unified generator interface for Ollama and future backends

use anyhow::Result;
use async_trait::async_trait;

pub mod ollama;

pub use ollama::OllamaGenerator;

/// Text-generation backend seam.
///
/// One prompt in, one completed text out. Calls carry no shared conversation
/// state; every invocation is independent.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a complete response for a single prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get generator name for logging
    fn name(&self) -> &str;
}
