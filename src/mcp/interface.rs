//! MCP Interface
//!
//! Routes MCP protocol methods to handlers. Every transport (stdio, HTTP)
//! hands decoded requests to the same interface.

use std::sync::Arc;

use serde_json::{json, Value};

use super::{
    error::McpError,
    tools,
    types::{
        CallToolParams, InitializeParams, InitializeResult, JsonRpcRequest, JsonRpcResponse,
        ServerCapabilities, ServerInfo, ToolsCapability, ToolsListResult, JSONRPC_VERSION,
        LATEST_VERSION, SUPPORTED_VERSIONS,
    },
};
use crate::detect::SlopAnalyzer;

pub const SERVER_NAME: &str = "talkhuman";

/// The MCP interface. Stateless apart from the shared analyzer, so one
/// instance serves any number of sessions.
#[derive(Debug, Clone)]
pub struct McpInterface {
    analyzer: Arc<SlopAnalyzer>,
    server_info: ServerInfo,
}

impl McpInterface {
    pub fn new(analyzer: Arc<SlopAnalyzer>) -> Self {
        Self {
            analyzer,
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn analyzer(&self) -> &Arc<SlopAnalyzer> {
        &self.analyzer
    }

    pub fn server_info(&self) -> &ServerInfo {
        &self.server_info
    }

    /// Route a method to its handler.
    pub fn handle(&self, method: &str, params: Option<Value>) -> Result<Value, McpError> {
        tracing::debug!(method = %method, "Handling MCP request");

        match method {
            // Lifecycle
            "initialize" => self.handle_initialize(params),
            "notifications/initialized" | "initialized" => Ok(Value::Null),

            // Utility
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(params),

            _ => Err(McpError::MethodNotFound(method.to_string())),
        }
    }

    /// Handle a decoded JSON-RPC message.
    ///
    /// Returns `None` for notifications, which never get a response even
    /// when they fail.
    pub fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.jsonrpc != JSONRPC_VERSION {
            let id = request.id.unwrap_or(Value::Null);
            let err = McpError::InvalidRequest(format!(
                "unsupported jsonrpc version {:?}",
                request.jsonrpc
            ));
            return Some(JsonRpcResponse::error(id, err.into()));
        }

        let is_notification = request.is_notification();
        let result = self.handle(&request.method, request.params);

        if is_notification {
            if let Err(e) = result {
                tracing::warn!(method = %request.method, error = %e, "Notification failed");
            }
            return None;
        }

        let id = request.id.unwrap_or(Value::Null);
        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => {
                tracing::debug!(method = %request.method, error = %e, "MCP request failed");
                JsonRpcResponse::error(id, e.into())
            }
        })
    }

    fn handle_initialize(&self, params: Option<Value>) -> Result<Value, McpError> {
        let params: InitializeParams = match params {
            Some(p) => serde_json::from_value(p).map_err(|e| McpError::InvalidParams(e.to_string()))?,
            None => InitializeParams::default(),
        };

        let protocol_version = match params.protocol_version.as_deref() {
            Some(v) if SUPPORTED_VERSIONS.contains(&v) => v.to_string(),
            _ => LATEST_VERSION.to_string(),
        };

        if let Some(client) = &params.client_info {
            tracing::info!(
                client = %client.name,
                client_version = %client.version,
                protocol_version = %protocol_version,
                "MCP initialize request"
            );
        }

        let result = InitializeResult {
            protocol_version,
            capabilities: ServerCapabilities {
                tools: ToolsCapability { list_changed: false },
            },
            server_info: self.server_info().clone(),
        };

        serde_json::to_value(result).map_err(|e| McpError::Internal(e.to_string()))
    }

    fn handle_tools_list(&self) -> Result<Value, McpError> {
        let result = ToolsListResult {
            tools: tools::definitions(),
        };
        serde_json::to_value(result).map_err(|e| McpError::Internal(e.to_string()))
    }

    fn handle_tools_call(&self, params: Option<Value>) -> Result<Value, McpError> {
        let params = params.ok_or_else(|| McpError::InvalidParams("Missing params".to_string()))?;
        let params: CallToolParams =
            serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))?;
        let arguments = params.arguments.unwrap_or_else(|| json!({}));

        let result = tools::call(self.analyzer(), &params.name, &arguments)?;
        serde_json::to_value(result).map_err(|e| McpError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interface() -> McpInterface {
        McpInterface::new(Arc::new(SlopAnalyzer::standard()))
    }

    #[test]
    fn test_initialize_echoes_supported_version() {
        let mcp = interface();
        let result = mcp
            .handle(
                "initialize",
                Some(json!({
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": { "name": "test-client", "version": "1.0.0" }
                })),
            )
            .unwrap();

        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "talkhuman");
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[test]
    fn test_initialize_unknown_version_gets_latest() {
        let mcp = interface();
        let result = mcp
            .handle("initialize", Some(json!({"protocolVersion": "1999-01-01"})))
            .unwrap();
        assert_eq!(result["protocolVersion"], LATEST_VERSION);

        let result = mcp.handle("initialize", None).unwrap();
        assert_eq!(result["protocolVersion"], LATEST_VERSION);
    }

    #[test]
    fn test_tools_list() {
        let result = interface().handle("tools/list", None).unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[1]["name"], "check_for_slop");
    }

    #[test]
    fn test_unknown_method() {
        let result = interface().handle("resources/list", None);
        assert!(matches!(result, Err(McpError::MethodNotFound(_))));
    }

    #[test]
    fn test_tools_call_without_params() {
        let result = interface().handle("tools/call", None);
        assert!(matches!(result, Err(McpError::InvalidParams(_))));
    }

    #[test]
    fn test_new_interface() {
        let mcp = interface();
        assert_eq!(mcp.server_info().name, SERVER_NAME);
        assert_eq!(mcp.server_info().version, env!("CARGO_PKG_VERSION"));
        assert!(!mcp.analyzer().rules().cliche_phrases.is_empty());
    }

    #[test]
    fn test_notification_gets_no_response() {
        let mcp = interface();
        let note = JsonRpcRequest {
            jsonrpc: "2.0".into(),
            id: None,
            method: "notifications/initialized".into(),
            params: None,
        };
        assert!(note.is_notification());
        assert!(mcp.handle_request(note).is_none());

        let bad_note = JsonRpcRequest {
            jsonrpc: "2.0".into(),
            id: None,
            method: "no/such/method".into(),
            params: None,
        };
        assert!(mcp.handle_request(bad_note).is_none());
    }

    #[test]
    fn test_wrong_jsonrpc_version() {
        let mut request = JsonRpcRequest::new(7, "ping", None);
        request.jsonrpc = "1.0".into();
        let response = interface().handle_request(request).unwrap();
        assert_eq!(response.id, json!(7));
        assert_eq!(response.error.unwrap().code, -32600);
    }

    #[test]
    fn test_tools_call_response() {
        let request = JsonRpcRequest::new(
            3,
            "tools/call",
            Some(json!({"name": "check_for_slop", "arguments": {"text": "The cat sat on the mat."}})),
        );
        let response = interface().handle_request(request).unwrap();
        let result = response.result.unwrap();
        assert_eq!(
            result["content"][0]["text"],
            "No obvious AI slop detected. Text appears human-like."
        );
    }
}
