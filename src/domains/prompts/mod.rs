//! Prompts domain module.
//!
//! This module owns prompt persistence. Prompts are plain Markdown files
//! stored as `<root>/<category>/<name>.md`; the directory tree itself is
//! the catalog, so there is no index to keep in sync.
//!
//! ## Architecture
//!
//! - `store.rs` - Filesystem accessor (save, load, delete, list)
//! - `error.rs` - Storage error types

mod error;
mod store;

pub use error::PromptError;
pub use store::PromptStore;
