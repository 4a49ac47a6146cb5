//! Prompt-store error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during prompt storage operations.
///
/// Both variants are recoverable from the caller's point of view: they are
/// reported back through the tool-result channel rather than terminating
/// the request or the server.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The requested prompt does not exist in the given category.
    #[error("'{name}' not found in '{category}'.")]
    NotFound { name: String, category: String },

    /// The filesystem rejected an operation (permissions, disk faults, ...).
    #[error("storage error at '{}': {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PromptError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self::NotFound {
            name: name.into(),
            category: category.into(),
        }
    }

    /// Create a new "storage" error for the given path.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }
}
