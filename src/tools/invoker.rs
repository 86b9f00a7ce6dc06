// Capability invoker boundary

use async_trait::async_trait;
use thiserror::Error;

/// Failure taxonomy for capability invocation.
///
/// Both variants are rendered to text and substituted for the expected
/// result; they are never raised to the attempt loop.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool '{0}' not found in registry.")]
    UnknownTool(String),

    #[error("Error executing tool '{name}': {reason}")]
    Execution { name: String, reason: String },
}

/// Executes a named capability with positional string arguments.
///
/// The result is always text: either the capability's output or a
/// human-readable failure message.
#[async_trait]
pub trait ToolInvoker: Send + Sync {
    async fn invoke(&self, name: &str, args: &[String]) -> String;
}
