// Capability system
//
// A capability is an externally callable, named operation with a fixed
// positional parameter list. Generated text requests one with an embedded
// `CALL_TOOL: name(arg1, arg2)` directive; the invoker runs it and the raw
// result (or failure message) is substituted back into the attempt.

pub mod catalog;
pub mod directive;
pub mod implementations;
pub mod invoker;
pub mod registry;

pub use catalog::{ToolCatalog, ToolSpec};
pub use directive::{parse_directive, ToolDirective, TOOL_MARKER};
pub use invoker::{ToolError, ToolInvoker};
pub use registry::{Tool, ToolRegistry};
