//! Prompt server implementation and lifecycle management.
//!
//! This module contains the server object the transport layer talks to. It
//! owns the configuration, the prompt store and the tool registry, and is
//! handed to the HTTP layer by value (it is cheap to clone).
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (schema-checked binding)
//! - `execute()` method (core logic)
//! - `call()` method (dispatched via ToolRegistry)
//!
//! **Adding a new tool does NOT require modifying this file!**

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use super::config::Config;
use super::error::Result;
use crate::domains::prompts::PromptStore;
use crate::domains::tools::{ToolError, ToolRegistry};

/// The main prompt server.
///
/// Construction opens the storage root and builds the validated tool
/// registry; a server that constructed successfully can dispatch any
/// advertised tool.
#[derive(Clone)]
pub struct PromptServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry dispatching tool calls against the prompt store.
    registry: Arc<ToolRegistry>,
}

impl PromptServer {
    /// MCP protocol revision reported to clients during initialize.
    pub const PROTOCOL_VERSION: &'static str = "2025-03-26";

    /// Create a new prompt server with the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let store = Arc::new(PromptStore::new(config.storage.root.clone())?);
        info!("Prompt store opened at {}", config.storage.root.display());

        let registry = Arc::new(ToolRegistry::new(store)?);

        Ok(Self { config, registry })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// List all available tool descriptors.
    pub fn list_tools(&self) -> Vec<Value> {
        ToolRegistry::catalog()
    }

    /// Call a tool by name.
    ///
    /// The name may carry the `prompts.` namespace or not; resolution is
    /// handled by the registry.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        self.registry.call(name, arguments)
    }
}
