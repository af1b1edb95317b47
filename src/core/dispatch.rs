//! Tool selection and injection.

use std::path::Path;

use crate::core::format::Tool;
use crate::core::inject::{self, Injection};
use crate::core::types::Variables;
use crate::error::Result;

/// Result of a dispatch: what was written and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub tool: Tool,
    pub injection: Injection,
    /// Variables handed to the injector, kept for later steps in this run.
    pub vars: Variables,
}

/// Resolve `tool` and inject `vars` into `path`.
///
/// # Errors
///
/// Returns `Error::InvalidTool` for an unknown identifier before any file is
/// touched, or `Error::Io` from the injector.
pub fn dispatch(tool: &str, vars: Variables, path: impl AsRef<Path>) -> Result<Dispatched> {
    let tool: Tool = tool.parse()?;
    let injection = inject::inject(&vars, tool, path)?;

    Ok(Dispatched {
        tool,
        injection,
        vars,
    })
}
