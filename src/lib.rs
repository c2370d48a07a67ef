//! talkhuman - AI slop detection for prose.
//!
//! talkhuman scores text for the patterns that make it read as
//! machine-written and serves a human-writing guide to LLM clients.
//!
//! # Architecture
//!
//! One analyzer sits behind every interface; each transport is a thin
//! adapter that validates input and reshapes the result:
//!
//! - `detect`: The analysis pipeline (`SlopAnalyzer`) and its result types
//! - `rules`: Rule sets (phrase lists, thresholds) and YAML config
//! - `guide`: The writing guide and slop examples
//! - `score`: Slop score and grade calculation
//! - `report`: Output formatting (pretty, JSON, markdown)
//! - `mcp`: MCP tool server (JSON-RPC 2.0), stdio transport
//! - `server`: HTTP adapter (REST endpoints plus MCP over HTTP/SSE)
//! - `error`: Input validation shared by the transports
//!
//! # Example
//!
//! ```
//! use talkhuman::SlopAnalyzer;
//!
//! let result = SlopAnalyzer::standard().analyze("Let's delve into the details.");
//! assert!(result.has_slop);
//! ```

pub mod cli;
pub mod detect;
pub mod error;
pub mod guide;
pub mod mcp;
pub mod report;
pub mod rules;
pub mod score;
pub mod server;

pub use detect::{AnalysisResult, Finding, FindingKind, SlopAnalyzer};
pub use error::{validate_text, InputError};
pub use rules::{Config, RuleSet};
pub use score::SlopScore;
