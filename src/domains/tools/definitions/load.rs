//! Load prompt tool definition.
//!
//! Reads a prompt file back verbatim from its category directory.

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

/// Parameters for the load prompt tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LoadPromptParams {
    /// Prompt name to look up.
    pub name: String,
    /// Category the prompt lives in.
    pub category: String,
}

// ============================================================================
// Output Structure
// ============================================================================

/// Result of a load operation.
#[derive(Debug, Serialize, JsonSchema)]
pub struct LoadResult {
    /// The prompt text, byte for byte as it was saved.
    content: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Load prompt tool - returns a stored prompt's full text.
pub struct LoadPromptTool;

impl LoadPromptTool {
    /// Operation name the dispatcher resolves after namespace stripping.
    pub const OPERATION: &'static str = "load_prompt";

    /// Fully qualified name advertised in the tool catalog.
    pub const NAME: &'static str = "prompts.load_prompt";

    /// Human-readable title.
    pub const TITLE: &'static str = "Load Prompt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Load the content of a prompt from a category.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name, category = %params.category))]
    pub fn execute(params: &LoadPromptParams, store: &PromptStore) -> Result<LoadResult, PromptError> {
        let content = store.load(&params.name, &params.category)?;
        info!("Loaded prompt '{}' from '{}'", params.name, params.category);
        Ok(LoadResult { content })
    }

    /// Registry entry point: bind the arguments, run, serialize the result.
    pub fn call(store: &PromptStore, arguments: Value) -> Result<Value, ToolError> {
        let params: LoadPromptParams = bind_arguments(Self::NAME, arguments)?;
        let result = Self::execute(&params, store)?;
        to_result_value(result)
    }

    /// Catalog descriptor for this tool.
    pub fn descriptor() -> Value {
        json!({
            "name": Self::NAME,
            "title": Self::TITLE,
            "description": Self::DESCRIPTION,
            "inputSchema": schema_object::<LoadPromptParams>(),
            "outputSchema": schema_object::<LoadResult>(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
