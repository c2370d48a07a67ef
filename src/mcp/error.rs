//! MCP errors and their JSON-RPC error codes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::InputError;

/// Standard JSON-RPC 2.0 error codes.
pub mod codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum McpError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("{0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl McpError {
    pub fn code(&self) -> i32 {
        match self {
            McpError::Parse(_) => codes::PARSE_ERROR,
            McpError::InvalidRequest(_) => codes::INVALID_REQUEST,
            McpError::MethodNotFound(_) | McpError::UnknownTool(_) => codes::METHOD_NOT_FOUND,
            McpError::InvalidParams(_) => codes::INVALID_PARAMS,
            McpError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }
}

impl From<InputError> for McpError {
    fn from(e: InputError) -> Self {
        match e {
            InputError::MissingText => McpError::InvalidParams("No text provided".to_string()),
            other => McpError::InvalidParams(other.to_string()),
        }
    }
}

/// Error object carried in a JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl From<McpError> for JsonRpcError {
    fn from(e: McpError) -> Self {
        Self {
            code: e.code(),
            message: e.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(McpError::Parse("x".into()).code(), -32700);
        assert_eq!(McpError::InvalidRequest("x".into()).code(), -32600);
        assert_eq!(McpError::MethodNotFound("x".into()).code(), -32601);
        assert_eq!(McpError::UnknownTool("x".into()).code(), -32601);
        assert_eq!(McpError::InvalidParams("x".into()).code(), -32602);
        assert_eq!(McpError::Internal("x".into()).code(), -32603);
    }

    #[test]
    fn test_missing_text_message() {
        let err: JsonRpcError = McpError::from(InputError::MissingText).into();
        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "No text provided");
    }

    #[test]
    fn test_unknown_tool_message() {
        let err: JsonRpcError = McpError::UnknownTool("summarize".into()).into();
        assert_eq!(err.message, "Unknown tool: summarize");
    }
}
