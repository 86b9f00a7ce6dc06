// Capability registry
//
// Lookup table from capability name to implementation. Discovery
// (`mockingbird tools`) serializes the registered specs into the catalog
// JSON; at solve time the registry doubles as the invoker.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use super::catalog::{ToolCatalog, ToolSpec};
use super::implementations;
use super::invoker::{ToolError, ToolInvoker};

/// A single executable capability.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Defining module, recorded in the registry JSON.
    fn module(&self) -> &'static str;

    /// Ordered parameter names, positional.
    fn params(&self) -> &'static [&'static str];

    async fn execute(&self, args: &[String]) -> Result<String>;
}

/// Registry of executable capabilities.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<&'static str, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the builtin capability set.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for tool in implementations::builtin_tools()? {
            registry.register(tool);
        }
        Ok(registry)
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Build the catalog the discovery step writes to disk.
    pub fn catalog(&self) -> ToolCatalog {
        let mut catalog = ToolCatalog::new();
        for tool in self.tools.values() {
            catalog.insert(
                tool.name(),
                ToolSpec {
                    module: tool.module().to_string(),
                    description: tool.description().to_string(),
                    params: tool.params().iter().map(|p| p.to_string()).collect(),
                },
            );
        }
        catalog
    }
}

#[async_trait]
impl ToolInvoker for ToolRegistry {
    async fn invoke(&self, name: &str, args: &[String]) -> String {
        let Some(tool) = self.tools.get(name) else {
            tracing::warn!("Capability lookup failed: {}", name);
            return ToolError::UnknownTool(name.to_string()).to_string();
        };

        tracing::debug!(tool = name, args = args.len(), "Executing capability");

        match tool.execute(args).await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("Capability {} failed: {:#}", name, e);
                ToolError::Execution {
                    name: name.to_string(),
                    reason: format!("{e:#}"),
                }
                .to_string()
            }
        }
    }
}
