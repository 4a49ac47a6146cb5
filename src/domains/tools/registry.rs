//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - An explicit name-to-handler table built at startup
//! - Namespace-aware dispatch for tool calls
//! - The tool catalog served by `tools/list` and `initialize`
//!
//! The handler table and the catalog are checked against each other when
//! the registry is built, so a tool cannot be advertised without a handler
//! or dispatchable without being advertised.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use crate::domains::prompts::PromptStore;

use super::ToolError;
use super::definitions::{
    DeletePromptTool, HelpTool, ListCategoriesTool, ListPromptsTool, LoadPromptTool,
    SavePromptTool,
};

/// Signature every registered tool handler conforms to.
type HandlerFn = fn(&PromptStore, Value) -> Result<Value, ToolError>;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns the store and the dispatch table.
///
/// Dispatch works on operation names: an incoming tool name is stripped of
/// any dotted namespace prefix and looked up in the table. Nothing outside
/// the table can be invoked.
#[derive(Debug)]
pub struct ToolRegistry {
    store: Arc<PromptStore>,
    handlers: HashMap<&'static str, HandlerFn>,
}

impl ToolRegistry {
    /// Build the registry and verify it against the catalog.
    pub fn new(store: Arc<PromptStore>) -> Result<Self, ToolError> {
        Self::from_handlers(store, Self::default_handlers())
    }

    /// Handler table covering every catalog operation.
    fn default_handlers() -> HashMap<&'static str, HandlerFn> {
        let mut handlers: HashMap<&'static str, HandlerFn> = HashMap::new();
        handlers.insert(SavePromptTool::OPERATION, SavePromptTool::call as HandlerFn);
        handlers.insert(ListPromptsTool::OPERATION, ListPromptsTool::call as HandlerFn);
        handlers.insert(
            ListCategoriesTool::OPERATION,
            ListCategoriesTool::call as HandlerFn,
        );
        handlers.insert(LoadPromptTool::OPERATION, LoadPromptTool::call as HandlerFn);
        handlers.insert(
            DeletePromptTool::OPERATION,
            DeletePromptTool::call as HandlerFn,
        );
        handlers.insert(HelpTool::OPERATION, HelpTool::call as HandlerFn);
        handlers
    }

    /// Build a registry from an explicit handler table, rejecting any table
    /// that does not line up with the catalog.
    fn from_handlers(
        store: Arc<PromptStore>,
        handlers: HashMap<&'static str, HandlerFn>,
    ) -> Result<Self, ToolError> {
        let registry = Self { store, handlers };
        registry.verify_catalog()?;
        Ok(registry)
    }

    /// Get all tool descriptors for `tools/list`.
    ///
    /// This is the single source of truth for the advertised tool surface.
    pub fn catalog() -> Vec<Value> {
        vec![
            SavePromptTool::descriptor(),
            ListPromptsTool::descriptor(),
            ListCategoriesTool::descriptor(),
            LoadPromptTool::descriptor(),
            DeletePromptTool::descriptor(),
            HelpTool::descriptor(),
        ]
    }

    /// Dispatch a tool call to the registered handler.
    ///
    /// The name may be namespaced (`prompts.load_prompt`) or bare
    /// (`load_prompt`); only the final segment selects the operation.
    pub fn call(&self, tool_name: &str, arguments: Value) -> Result<Value, ToolError> {
        let operation = strip_namespace(tool_name);
        let Some(handler) = self.handlers.get(operation) else {
            warn!("Unknown tool requested: {}", tool_name);
            return Err(ToolError::unknown_tool(tool_name));
        };
        handler(&self.store, arguments)
    }

    /// Check the handler table and the catalog against each other.
    fn verify_catalog(&self) -> Result<(), ToolError> {
        let mut advertised = Vec::with_capacity(self.handlers.len());
        for descriptor in Self::catalog() {
            let name = descriptor
                .get("name")
                .and_then(Value::as_str)
                .ok_or_else(|| ToolError::internal("tool descriptor without a name"))?
                .to_string();
            let operation = strip_namespace(&name).to_string();
            if !self.handlers.contains_key(operation.as_str()) {
                return Err(ToolError::internal(format!(
                    "catalog advertises '{name}' but no handler is registered for '{operation}'"
                )));
            }
            advertised.push(operation);
        }
        for operation in self.handlers.keys() {
            if !advertised.iter().any(|a| a == operation) {
                return Err(ToolError::internal(format!(
                    "handler '{operation}' is not advertised in the catalog"
                )));
            }
        }
        Ok(())
    }
}

/// Tool names may carry a dotted namespace; the operation is the text after
/// the last dot.
fn strip_namespace(tool_name: &str) -> &str {
    tool_name.rsplit('.').next().unwrap_or(tool_name)
}
