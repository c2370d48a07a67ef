//! MCP stdio transport: newline-delimited JSON-RPC on stdin/stdout.
//!
//! Stdout carries protocol frames only; logging goes to stderr.

use std::io::{BufRead, Write};

use anyhow::Result;
use serde_json::Value;

use super::error::McpError;
use super::interface::McpInterface;
use super::types::{JsonRpcRequest, JsonRpcResponse};

/// Run the MCP server on the process's stdin and stdout until EOF.
pub fn serve_stdio(mcp: &McpInterface) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    tracing::info!("MCP stdio server ready");
    serve(mcp, stdin.lock(), stdout.lock())
}

/// Serve requests read from `reader`, writing responses to `writer`.
pub fn serve<R: BufRead, W: Write>(mcp: &McpInterface, reader: R, mut writer: W) -> Result<()> {
    for line in reader.lines() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
            Ok(request) => mcp.handle_request(request),
            Err(e) => {
                tracing::warn!(error = %e, "Unparseable MCP frame");
                Some(JsonRpcResponse::error(
                    Value::Null,
                    McpError::Parse(e.to_string()).into(),
                ))
            }
        };

        // Notifications get no response
        let Some(response) = response else {
            continue;
        };

        let response_json = serde_json::to_string(&response)?;
        writeln!(writer, "{}", response_json)?;
        writer.flush()?;
    }

    tracing::info!("MCP stdio input closed");
    Ok(())
}
