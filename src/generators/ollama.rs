// Ollama generator implementation

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::ollama::{GenerateRequest, OllamaClient};

use super::Generator;

pub struct OllamaGenerator {
    client: Arc<OllamaClient>,
    model: String,
}

impl OllamaGenerator {
    pub fn new(client: Arc<OllamaClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Generator for OllamaGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest::new(&self.model, prompt);
        let response = self.client.generate(&request).await?;
        Ok(response.response)
    }

    fn name(&self) -> &str {
        "Ollama"
    }
}
