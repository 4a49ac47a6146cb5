//! Tool-specific error types.

use thiserror::Error;

use crate::domains::prompts::PromptError;

/// Errors that can occur while resolving and running a tool.
///
/// The variants map onto distinct wire-level outcomes: `UnknownTool` and
/// `InvalidArguments` become JSON-RPC error objects, while `Failed` is a
/// recoverable tool result that still completes the call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No registered tool matches the requested name.
    #[error("Method '{0}' not found.")]
    UnknownTool(String),

    /// The arguments object did not bind to the tool's parameter type.
    #[error("Invalid arguments for tool '{tool}': {detail}")]
    InvalidArguments { tool: String, detail: String },

    /// The tool ran and reported a recoverable failure.
    #[error(transparent)]
    Failed(#[from] PromptError),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error, keeping the name as requested.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(tool: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            detail: detail.into(),
        }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
