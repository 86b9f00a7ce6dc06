// Configuration loader
// Merges ~/.mockingbird/config.toml over defaults, then environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use super::settings::Config;

/// TOML file shape: every field optional, absent fields keep defaults.
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    model: Option<String>,
    ollama_url: Option<String>,
    learning_rate: Option<f64>,
    discount_factor: Option<f64>,
    max_attempts: Option<usize>,
    perspective_count: Option<usize>,
    memory_path: Option<PathBuf>,
    tools_registry_path: Option<PathBuf>,
    metrics_dir: Option<PathBuf>,
}

/// Load configuration. A missing config file is not an error; defaults apply.
pub fn load_config() -> Result<Config> {
    let mut config = Config::default();

    if let Some(home) = dirs::home_dir() {
        let config_path = home.join(".mockingbird").join("config.toml");
        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
            let toml_config: TomlConfig = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;
            apply(&mut config, toml_config);
            tracing::debug!("Loaded configuration from {}", config_path.display());
        }
    }

    // Environment overrides, OLLAMA_HOST following the Ollama CLI convention
    if let Ok(url) = std::env::var("OLLAMA_HOST") {
        if !url.is_empty() {
            config.ollama_url = url;
        }
    }
    if let Ok(model) = std::env::var("MOCKINGBIRD_MODEL") {
        if !model.is_empty() {
            config.model = model;
        }
    }

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

fn apply(config: &mut Config, overrides: TomlConfig) {
    if let Some(model) = overrides.model {
        config.model = model;
    }
    if let Some(url) = overrides.ollama_url {
        config.ollama_url = url;
    }
    if let Some(lr) = overrides.learning_rate {
        config.learning_rate = lr;
    }
    if let Some(gamma) = overrides.discount_factor {
        config.discount_factor = gamma;
    }
    if let Some(attempts) = overrides.max_attempts {
        config.max_attempts = attempts;
    }
    if let Some(count) = overrides.perspective_count {
        config.perspective_count = count;
    }
    if let Some(path) = overrides.memory_path {
        config.memory_path = path;
    }
    if let Some(path) = overrides.tools_registry_path {
        config.tools_registry_path = path;
    }
    if let Some(dir) = overrides.metrics_dir {
        config.metrics_dir = dir;
    }
}
