// Web fetch capability

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::tools::registry::Tool;

const FETCH_TIMEOUT_SECS: u64 = 30;

/// Fetches a web page and returns its body text.
pub struct FetchPage {
    client: reqwest::Client,
}

impl FetchPage {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client for fetch_page")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Tool for FetchPage {
    fn name(&self) -> &'static str {
        "fetch_page"
    }

    fn description(&self) -> &'static str {
        "Fetches a web page over HTTP and returns its body"
    }

    fn module(&self) -> &'static str {
        "web"
    }

    fn params(&self) -> &'static [&'static str] {
        &["url"]
    }

    async fn execute(&self, args: &[String]) -> Result<String> {
        let url = args
            .first()
            .ok_or_else(|| anyhow!("missing 'url' argument"))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("request to {url} returned status {status}");
        }

        response
            .text()
            .await
            .with_context(|| format!("failed to read body from {url}"))
    }
}
