//! REST endpoints: server info, text check, rules and examples.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::AppState;
use crate::error::{validate_text, InputError};
use crate::guide::{self, ExampleCategory};
use crate::mcp::tools;
use crate::report::CheckResponse;

/// Name reported by `GET /`.
pub const SERVER_DISPLAY_NAME: &str = "TalkHuman MCP Server";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Errors returned as `{"error": message}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl From<InputError> for ApiError {
    fn from(_: InputError) -> Self {
        ApiError::BadRequest(InputError::MissingText.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

/// GET /
pub async fn server_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": SERVER_DISPLAY_NAME,
        "version": state.mcp.server_info().version,
        "status": "running",
        "description": "Detects AI slop in prose and serves human-writing guidance",
        "tools": [tools::GET_RULES, tools::CHECK_FOR_SLOP, tools::GET_EXAMPLES],
        "usage": {
            "get_rules": "GET /api/rules",
            "check_text": "POST /api/check with {\"text\": \"your text\"}",
            "get_examples": "GET /api/examples?category=phrases",
            "mcp": "POST /mcp (JSON-RPC 2.0), GET /mcp (SSE)"
        }
    }))
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// POST /api/check
pub async fn check(
    State(state): State<AppState>,
    body: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<CheckResponse>, ApiError> {
    let text = match &body {
        Ok(Json(request)) => request.text.as_deref(),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected check body");
            None
        }
    };

    let text = validate_text(text).map_err(|e| {
        tracing::warn!(error = %e, "Rejected check request");
        ApiError::from(e)
    })?;

    let result = state.analyzer.analyze(text);
    tracing::debug!(
        has_slop = result.has_slop,
        findings = result.findings.len(),
        "Analyzed text"
    );
    Ok(Json(CheckResponse::from(&result)))
}

#[derive(Debug, Deserialize)]
pub struct RulesQuery {
    pub context: Option<String>,
}

/// GET /api/rules
pub async fn rules(Query(query): Query<RulesQuery>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, TEXT_PLAIN)],
        guide::writing_rules(query.context.as_deref()),
    )
}

#[derive(Debug, Deserialize)]
pub struct ExamplesQuery {
    pub category: Option<String>,
}

/// GET /api/examples
pub async fn examples(Query(query): Query<ExamplesQuery>) -> Result<Response, ApiError> {
    let category = match query.category.as_deref() {
        Some(c) => c.parse::<ExampleCategory>().map_err(ApiError::BadRequest)?,
        None => ExampleCategory::All,
    };
    Ok((
        [(header::CONTENT_TYPE, TEXT_PLAIN)],
        guide::slop_examples(category),
    )
        .into_response())
}
