// Capability catalog
//
// Read-only index of available capabilities, loaded from the registry JSON
// produced by `mockingbird tools`. The attempt loop only renders it into
// prompts; execution goes through the invoker.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One catalog entry: defining module, description, ordered parameter names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    pub module: String,
    pub description: String,
    pub params: Vec<String>,
}

/// Mapping from capability name to its spec, ordered by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolCatalog {
    entries: BTreeMap<String, ToolSpec>,
}

impl ToolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: ToolSpec) {
        self.entries.insert(name.into(), spec);
    }

    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a catalog from the registry JSON file.
    ///
    /// A missing file is empty-state initialization, not an error: the run
    /// proceeds without capabilities, and the caller is expected to tell the
    /// operator to run discovery first.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                "Capability registry {} not found; running without capabilities",
                path.display()
            );
            return Ok(Self::new());
        }

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read capability registry: {}", path.display()))?;
        let entries: BTreeMap<String, ToolSpec> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse capability registry: {}", path.display()))?;

        Ok(Self { entries })
    }

    /// Save the catalog as the registry JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize capability registry")?;
        std::fs::write(path.as_ref(), json).with_context(|| {
            format!(
                "Failed to write capability registry: {}",
                path.as_ref().display()
            )
        })?;
        Ok(())
    }

    /// Render the listing embedded in prompts: one line per capability with
    /// name, description, and parameter names.
    pub fn render_listing(&self) -> String {
        if self.entries.is_empty() {
            return "(no capabilities available)".to_string();
        }

        self.entries
            .iter()
            .map(|(name, spec)| {
                format!(
                    "- {}({}): {}",
                    name,
                    spec.params.join(", "),
                    spec.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
