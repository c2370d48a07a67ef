//! MCP (Model Context Protocol) tool server.
//!
//! Exposes the writing guide, the analyzer and the slop examples as three
//! MCP tools over JSON-RPC 2.0. The protocol layer is transport-agnostic;
//! [`stdio`] serves it over stdin/stdout and `crate::server` over HTTP.
//!
//! ## Modules
//!
//! - [`error`] - MCP error type with JSON-RPC error codes
//! - [`types`] - JSON-RPC envelopes and MCP payloads
//! - [`tools`] - tool definitions and dispatch
//! - [`interface`] - `McpInterface`, which routes methods to handlers

pub mod error;
pub mod interface;
pub mod stdio;
pub mod tools;
pub mod types;

pub use error::{JsonRpcError, McpError};
pub use interface::McpInterface;
pub use stdio::serve_stdio;
pub use types::*;
