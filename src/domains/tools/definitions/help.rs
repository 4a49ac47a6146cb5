//! Help tool definition.
//!
//! Returns a fixed list of usage lines, one per tool. No inputs, no side
//! effects.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{bind_arguments, schema_object, to_result_value};
use crate::domains::prompts::PromptStore;
use crate::domains::tools::ToolError;

/// Usage lines returned by the help tool.
const HELP_LINES: &[&str] = &[
    "Using prompt-house MCP:",
    "1) prompts.list_categories → see available categories",
    "2) prompts.list_prompts {\"category\": <cat>} → see prompts in that category",
    "3) prompts.list_prompts {} → see prompts from every category, grouped",
    "4) prompts.save_prompt {\"name\": <n>, \"category\": <c>, \"prompt_content\": <text>}",
    "5) prompts.load_prompt {\"name\": <n>, \"category\": <c>} → fetch content",
    "6) prompts.delete_prompt {\"name\": <n>, \"category\": <c>}",
];

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the help tool. Takes no arguments.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct HelpParams {}

// ============================================================================
// Output Structure
// ============================================================================

/// Result of a help call.
#[derive(Debug, Serialize, JsonSchema)]
pub struct HelpResult {
    /// Usage lines, in display order.
    help: Vec<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Help tool - describes how to call every other tool.
pub struct HelpTool;

impl HelpTool {
    /// Operation name the dispatcher resolves after namespace stripping.
    pub const OPERATION: &'static str = "help";

    /// Fully qualified name advertised in the tool catalog.
    pub const NAME: &'static str = "prompts.help";

    /// Human-readable title.
    pub const TITLE: &'static str = "Help";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Show usage help for the prompt tools.";

    /// Execute the tool logic.
    pub fn execute(_params: &HelpParams) -> HelpResult {
        HelpResult {
            help: HELP_LINES.iter().map(|line| line.to_string()).collect(),
        }
    }

    /// Registry entry point: bind the arguments, run, serialize the result.
    pub fn call(_store: &PromptStore, arguments: Value) -> Result<Value, ToolError> {
        let params: HelpParams = bind_arguments(Self::NAME, arguments)?;
        to_result_value(Self::execute(&params))
    }

    /// Catalog descriptor for this tool.
    pub fn descriptor() -> Value {
        json!({
            "name": Self::NAME,
            "title": Self::TITLE,
            "description": Self::DESCRIPTION,
            "inputSchema": schema_object::<HelpParams>(),
            "outputSchema": schema_object::<HelpResult>(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
