// Capability directive grammar
//
// Grammar: `CALL_TOOL:` then a name of [A-Za-z0-9_]+, then a parenthesized
// comma-separated argument list. Arguments are trimmed raw strings; commas
// inside an argument value cannot be expressed. Text that does not match the
// grammar is ordinary content, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal marker that opens a capability directive.
pub const TOOL_MARKER: &str = "CALL_TOOL:";

static DIRECTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"CALL_TOOL:\s*([A-Za-z0-9_]+)\((.*?)\)").unwrap());

/// A parsed capability request: name plus positional string arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDirective {
    pub name: String,
    pub args: Vec<String>,
}

/// Parse the first capability directive embedded in `text`.
///
/// Returns `None` when no directive matches the grammar, in which case the
/// text is treated as plain generated content.
pub fn parse_directive(text: &str) -> Option<ToolDirective> {
    if !text.contains(TOOL_MARKER) {
        return None;
    }

    let caps = DIRECTIVE_RE.captures(text)?;

    let name = caps[1].to_string();
    let args = caps[2]
        .split(',')
        .map(|arg| arg.trim().to_string())
        .collect();

    Some(ToolDirective { name, args })
}
