//! List prompts tool definition.
//!
//! Lists stored prompt names, either for a single category or grouped
//! across every category.

use std::collections::HashMap;

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

/// Parameters for the list prompts tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListPromptsParams {
    /// Category to list. Omit to list prompts from every category.
    #[serde(default)]
    pub category: Option<String>,
}

// ============================================================================
// Output Structure
// ============================================================================

/// Result of a list operation.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ListPromptsResult {
    /// Prompt names keyed by category.
    prompts: HashMap<String, Vec<String>>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List prompts tool - maps categories to their prompt names.
pub struct ListPromptsTool;

impl ListPromptsTool {
    /// Operation name the dispatcher resolves after namespace stripping.
    pub const OPERATION: &'static str = "list_prompts";

    /// Fully qualified name advertised in the tool catalog.
    pub const NAME: &'static str = "prompts.list_prompts";

    /// Human-readable title.
    pub const TITLE: &'static str = "List Prompts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List prompt names for one category, or for all categories when none is given.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(category = ?params.category))]
    pub fn execute(
        params: &ListPromptsParams,
        store: &PromptStore,
    ) -> Result<ListPromptsResult, PromptError> {
        let prompts = store.list_prompts(params.category.as_deref())?;
        info!("Listed prompts for {} categories", prompts.len());
        Ok(ListPromptsResult { prompts })
    }

    /// Registry entry point: bind the arguments, run, serialize the result.
    pub fn call(store: &PromptStore, arguments: Value) -> Result<Value, ToolError> {
        let params: ListPromptsParams = bind_arguments(Self::NAME, arguments)?;
        let result = Self::execute(&params, store)?;
        to_result_value(result)
    }

    /// Catalog descriptor for this tool.
    pub fn descriptor() -> Value {
        json!({
            "name": Self::NAME,
            "title": Self::TITLE,
            "description": Self::DESCRIPTION,
            "inputSchema": schema_object::<ListPromptsParams>(),
            "outputSchema": schema_object::<ListPromptsResult>(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
