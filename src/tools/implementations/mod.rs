// Builtin capability implementations

mod html;
mod web;

use anyhow::Result;
use std::sync::Arc;

use super::registry::Tool;

pub use html::{FindAllElements, FindElement, GetText};
pub use web::FetchPage;

/// The builtin capability set registered by `ToolRegistry::with_builtins`.
pub fn builtin_tools() -> Result<Vec<Arc<dyn Tool>>> {
    Ok(vec![
        Arc::new(FindElement),
        Arc::new(FindAllElements),
        Arc::new(GetText),
        Arc::new(FetchPage::new()?),
    ])
}
