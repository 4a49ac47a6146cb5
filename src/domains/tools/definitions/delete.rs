//! Delete prompt tool definition.
//!
//! Removes a prompt file from its category directory. The category itself
//! is left in place even when it becomes empty.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, instrument};

use super::{bind_arguments, schema_object, to_result_value};
use crate::domains::prompts::{PromptError, PromptStore};
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the delete prompt tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DeletePromptParams {
    /// Prompt name to delete.
    pub name: String,
    /// Category the prompt lives in.
    pub category: String,
}

// ============================================================================
// Output Structure
// ============================================================================

/// Result of a delete operation.
#[derive(Debug, Serialize, JsonSchema)]
pub struct DeleteResult {
    /// Confirmation naming the prompt and its category.
    message: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Delete prompt tool - removes a stored prompt file.
pub struct DeletePromptTool;

impl DeletePromptTool {
    /// Operation name the dispatcher resolves after namespace stripping.
    pub const OPERATION: &'static str = "delete_prompt";

    /// Fully qualified name advertised in the tool catalog.
    pub const NAME: &'static str = "prompts.delete_prompt";

    /// Human-readable title.
    pub const TITLE: &'static str = "Delete Prompt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a prompt from a category.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name, category = %params.category))]
    pub fn execute(
        params: &DeletePromptParams,
        store: &PromptStore,
    ) -> Result<DeleteResult, PromptError> {
        store.delete(&params.name, &params.category)?;
        info!("Deleted prompt '{}' from '{}'", params.name, params.category);
        Ok(DeleteResult {
            message: format!(
                "Prompt '{}' deleted from '{}'.",
                params.name, params.category
            ),
        })
    }

    /// Registry entry point: bind the arguments, run, serialize the result.
    pub fn call(store: &PromptStore, arguments: Value) -> Result<Value, ToolError> {
        let params: DeletePromptParams = bind_arguments(Self::NAME, arguments)?;
        let result = Self::execute(&params, store)?;
        to_result_value(result)
    }

    /// Catalog descriptor for this tool.
    pub fn descriptor() -> Value {
        json!({
            "name": Self::NAME,
            "title": Self::TITLE,
            "description": Self::DESCRIPTION,
            "inputSchema": schema_object::<DeletePromptParams>(),
            "outputSchema": schema_object::<DeleteResult>(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
