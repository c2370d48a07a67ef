//! The three tools exposed over MCP.

use serde_json::{json, Value};

use super::error::McpError;
use super::types::{CallToolResult, Tool};
use crate::detect::SlopAnalyzer;
use crate::error::validate_text;
use crate::guide::{self, ExampleCategory};
use crate::report;

pub const GET_RULES: &str = "get_human_writing_rules";
pub const CHECK_FOR_SLOP: &str = "check_for_slop";
pub const GET_EXAMPLES: &str = "get_slop_examples";

/// Tool definitions returned by `tools/list`.
pub fn definitions() -> Vec<Tool> {
    vec![
        Tool {
            name: GET_RULES.into(),
            description: "Get comprehensive rules for writing like a human and avoiding AI slop. \
                          Use these rules as system-level instructions for any text generation task."
                .into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "context": {
                        "type": "string",
                        "description": "Optional: The context or type of writing (e.g., 'technical documentation', 'casual email', 'blog post')"
                    }
                }
            }),
        },
        Tool {
            name: CHECK_FOR_SLOP.into(),
            description: "Analyze text for AI slop indicators: cliché phrases, repetitive structure, \
                          formality, verbosity and information density. Returns specific patterns to avoid."
                .into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "description": "The text to analyze for AI slop indicators"
                    }
                },
                "required": ["text"]
            }),
        },
        Tool {
            name: GET_EXAMPLES.into(),
            description: "Get examples of common AI slop phrases and patterns to avoid, categorized by type."
                .into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "enum": ExampleCategory::NAMES,
                        "description": "The category of slop examples to retrieve"
                    }
                }
            }),
        },
    ]
}

/// Run tool `name` with `arguments`.
pub fn call(analyzer: &SlopAnalyzer, name: &str, arguments: &Value) -> Result<CallToolResult, McpError> {
    match name {
        GET_RULES => {
            let context = string_arg(arguments, "context");
            Ok(CallToolResult::text(guide::writing_rules(context)))
        }
        CHECK_FOR_SLOP => {
            let text = validate_text(string_arg(arguments, "text"))?;
            let result = analyzer.analyze(text);
            tracing::debug!(
                has_slop = result.has_slop,
                findings = result.findings.len(),
                "check_for_slop"
            );
            Ok(CallToolResult::text(report::render_markdown(&result)))
        }
        GET_EXAMPLES => {
            let category = match string_arg(arguments, "category") {
                Some(c) => c.parse::<ExampleCategory>().map_err(McpError::InvalidParams)?,
                None => ExampleCategory::All,
            };
            Ok(CallToolResult::text(guide::slop_examples(category)))
        }
        other => Err(McpError::UnknownTool(other.to_string())),
    }
}

fn string_arg<'a>(arguments: &'a Value, key: &str) -> Option<&'a str> {
    arguments.get(key).and_then(Value::as_str)
}
