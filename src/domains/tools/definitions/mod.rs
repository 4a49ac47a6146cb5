//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod categories;
pub mod delete;
pub mod help;
pub mod list;
pub mod load;
pub mod save;

pub use categories::ListCategoriesTool;
pub use delete::DeletePromptTool;
pub use help::HelpTool;
pub use list::ListPromptsTool;
pub use load::LoadPromptTool;
pub use save::SavePromptTool;

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::domains::tools::ToolError;

/// Bind a JSON arguments object to a tool's parameter type.
///
/// Unknown fields are rejected at this stage, so a typo'd argument fails
/// the call instead of being silently dropped.
pub(crate) fn bind_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: Value,
) -> Result<T, ToolError> {
    serde_json::from_value(arguments)
        .map_err(|e| ToolError::invalid_arguments(tool, e.to_string()))
}

/// Serialize a tool's output structure into the raw result value.
pub(crate) fn to_result_value<T: Serialize>(result: T) -> Result<Value, ToolError> {
    serde_json::to_value(result).map_err(|e| ToolError::internal(e.to_string()))
}

/// Derive a JSON Schema object for a parameter or output type.
///
/// The generator's `$schema` and `title` keys are stripped; clients only
/// need the object shape.
pub(crate) fn schema_object<T: JsonSchema>() -> Value {
    let mut schema = serde_json::to_value(schemars::schema_for!(T))
        .unwrap_or_else(|_| json!({"type": "object"}));
    if let Some(object) = schema.as_object_mut() {
        object.remove("$schema");
        object.remove("title");
    }
    schema
}
