//! Prompt House MCP Server Library
//!
//! This crate provides an MCP-style JSON-RPC server that stores, lists,
//! loads and deletes text prompts as Markdown files grouped into category
//! directories.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the server object and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **prompts**: Filesystem-backed prompt storage
//!   - **tools**: The six callable tools exposed over JSON-RPC
//!
//! # Example
//!
//! ```rust,no_run
//! use prompt_house::core::{Config, HttpTransport, PromptServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let http_config = config.http.clone();
//!     let server = PromptServer::new(config)?;
//!     HttpTransport::new(http_config).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, PromptServer, Result};
