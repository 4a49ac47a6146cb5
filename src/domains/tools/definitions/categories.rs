//! List categories tool definition.
//!
//! Enumerates the first-level directories under the storage root.

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

/// Parameters for the list categories tool. Takes no arguments.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ListCategoriesParams {}

// ============================================================================
// Output Structure
// ============================================================================

/// Result of a category listing.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ListCategoriesResult {
    /// Category names, in directory order.
    categories: Vec<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List categories tool - names every category directory.
pub struct ListCategoriesTool;

impl ListCategoriesTool {
    /// Operation name the dispatcher resolves after namespace stripping.
    pub const OPERATION: &'static str = "list_categories";

    /// Fully qualified name advertised in the tool catalog.
    pub const NAME: &'static str = "prompts.list_categories";

    /// Human-readable title.
    pub const TITLE: &'static str = "List Categories";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List every prompt category.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(
        _params: &ListCategoriesParams,
        store: &PromptStore,
    ) -> Result<ListCategoriesResult, PromptError> {
        let categories = store.list_categories()?;
        info!("Listed {} categories", categories.len());
        Ok(ListCategoriesResult { categories })
    }

    /// Registry entry point: bind the arguments, run, serialize the result.
    pub fn call(store: &PromptStore, arguments: Value) -> Result<Value, ToolError> {
        let params: ListCategoriesParams = bind_arguments(Self::NAME, arguments)?;
        let result = Self::execute(&params, store)?;
        to_result_value(result)
    }

    /// Catalog descriptor for this tool.
    pub fn descriptor() -> Value {
        json!({
            "name": Self::NAME,
            "title": Self::TITLE,
            "description": Self::DESCRIPTION,
            "inputSchema": schema_object::<ListCategoriesParams>(),
            "outputSchema": schema_object::<ListCategoriesResult>(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
