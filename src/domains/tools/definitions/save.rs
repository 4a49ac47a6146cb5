//! Save prompt tool definition.
//!
//! Writes a prompt file under its category directory, overwriting any
//! existing prompt with the same name without warning.

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

/// Parameters for the save prompt tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SavePromptParams {
    /// Prompt name, used as the file stem.
    pub name: String,
    /// Category directory the prompt is filed under.
    pub category: String,
    /// Full text of the prompt.
    pub prompt_content: String,
}

// ============================================================================
// Output Structure
// ============================================================================

/// Result of a save operation.
#[derive(Debug, Serialize, JsonSchema)]
pub struct SaveResult {
    /// Confirmation naming the prompt and its category.
    message: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Save prompt tool - stores a prompt file, creating its category on demand.
pub struct SavePromptTool;

impl SavePromptTool {
    /// Operation name the dispatcher resolves after namespace stripping.
    pub const OPERATION: &'static str = "save_prompt";

    /// Fully qualified name advertised in the tool catalog.
    pub const NAME: &'static str = "prompts.save_prompt";

    /// Human-readable title.
    pub const TITLE: &'static str = "Save Prompt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Save a prompt under a category. Overwrites an existing prompt with the same name.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name, category = %params.category))]
    pub fn execute(params: &SavePromptParams, store: &PromptStore) -> Result<SaveResult, PromptError> {
        store.save(&params.name, &params.category, &params.prompt_content)?;
        info!("Saved prompt '{}' in '{}'", params.name, params.category);
        Ok(SaveResult {
            message: format!("Prompt '{}' saved in '{}'.", params.name, params.category),
        })
    }

    /// Registry entry point: bind the arguments, run, serialize the result.
    pub fn call(store: &PromptStore, arguments: Value) -> Result<Value, ToolError> {
        let params: SavePromptParams = bind_arguments(Self::NAME, arguments)?;
        let result = Self::execute(&params, store)?;
        to_result_value(result)
    }

    /// Catalog descriptor for this tool.
    pub fn descriptor() -> Value {
        json!({
            "name": Self::NAME,
            "title": Self::TITLE,
            "description": Self::DESCRIPTION,
            "inputSchema": schema_object::<SavePromptParams>(),
            "outputSchema": schema_object::<SaveResult>(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
