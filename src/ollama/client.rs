// HTTP client for the Ollama generate endpoint

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use super::types::{GenerateRequest, GenerateResponse};

const GENERATE_PATH: &str = "/api/generate";
const REQUEST_TIMEOUT_SECS: u64 = 120;

pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Send a single generation request and wait for the complete response.
    ///
    /// No retries: the attempt loop treats a failed generation as degraded
    /// content, never as a reason to re-issue the request.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);

        tracing::debug!(model = %request.model, "Sending request to Ollama: {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to send request to Ollama")?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Ollama request failed\n\nStatus: {}\nBody: {}",
                status,
                error_body
            );
        }

        let generate_response: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        tracing::debug!(
            chars = generate_response.response.len(),
            "Received Ollama response"
        );

        Ok(generate_response)
    }
}
