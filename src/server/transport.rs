//! MCP over HTTP
//!
//! `POST /mcp` takes one JSON-RPC message and answers it. `GET /mcp` opens
//! an SSE stream that announces the message endpoint and then idles with
//! keep-alive comments.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, HeaderMap, HeaderName, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    Json,
};
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use super::AppState;
use crate::mcp::{JsonRpcRequest, JsonRpcResponse, McpError};

pub const SESSION_HEADER: &str = "mcp-session-id";

/// Interval between SSE keep-alive comments.
pub const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    pub session: Option<String>,
}

/// Longest client-supplied session id that is accepted as-is.
const MAX_SESSION_ID_LEN: usize = 128;

/// Session id from `?session=`, then the `Mcp-Session-Id` header, else a new one.
///
/// The id is echoed in a response header and in SSE event data, so a client
/// value is only kept when it is a UUID or a short `[A-Za-z0-9_-]` token.
fn session_id(query: &SessionQuery, headers: &HeaderMap) -> String {
    let from_header = || {
        headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    match query.session.clone().filter(|s| !s.is_empty()).or_else(from_header) {
        Some(id) if is_safe_session_id(&id) => id,
        Some(id) => {
            tracing::warn!(session_id = ?id, "Rejected client session id");
            Uuid::new_v4().to_string()
        }
        None => Uuid::new_v4().to_string(),
    }
}

fn is_safe_session_id(id: &str) -> bool {
    if Uuid::parse_str(id).is_ok() {
        return true;
    }
    !id.is_empty()
        && id.len() <= MAX_SESSION_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Handle POST /mcp
pub async fn handle_mcp_post(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let session_id = session_id(&query, &headers);

    let message = match body {
        Ok(Json(message)) => message,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unparseable MCP body");
            let response =
                JsonRpcResponse::error(Value::Null, McpError::Parse(rejection.body_text()).into());
            return (StatusCode::BAD_REQUEST, Json(response)).into_response();
        }
    };

    if message.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid JSON-RPC version" })),
        )
            .into_response();
    }

    let id = message.get("id").cloned().unwrap_or(Value::Null);
    let request: JsonRpcRequest = match serde_json::from_value(message) {
        Ok(request) => request,
        Err(e) => {
            let response = JsonRpcResponse::error(id, McpError::InvalidRequest(e.to_string()).into());
            return (StatusCode::OK, Json(response)).into_response();
        }
    };

    tracing::debug!(
        method = %request.method,
        id = ?request.id,
        session_id = %session_id,
        "MCP request received"
    );

    match state.mcp.handle_request(request) {
        None => StatusCode::ACCEPTED.into_response(),
        Some(response) => (
            StatusCode::OK,
            [(HeaderName::from_static(SESSION_HEADER), session_id)],
            Json(response),
        )
            .into_response(),
    }
}

/// Handle GET /mcp
pub async fn handle_mcp_sse(Query(query): Query<SessionQuery>, headers: HeaderMap) -> Response {
    let session_id = session_id(&query, &headers);
    tracing::info!(session_id = %session_id, "SSE stream opened");

    let sse = Sse::new(endpoint_stream(&session_id)).keep_alive(
        KeepAlive::new()
            .interval(KEEP_ALIVE_INTERVAL)
            .text("keepalive"),
    );

    (
        [
            (header::CACHE_CONTROL, "no-cache, no-transform"),
            (HeaderName::from_static("x-accel-buffering"), "no"),
        ],
        sse,
    )
        .into_response()
}

/// One `endpoint` event, then nothing until the client disconnects.
fn endpoint_stream(session_id: &str) -> impl Stream<Item = Result<Event, Infallible>> {
    let endpoint = Event::default()
        .event("endpoint")
        .data(format!("/mcp?session={}", session_id));

    stream::once(async move { Ok(endpoint) }).chain(stream::pending())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn query(session: &str) -> SessionQuery {
        SessionQuery {
            session: Some(session.to_string()),
        }
    }

    #[test]
    fn test_safe_session_ids() {
        assert!(is_safe_session_id("abc123"));
        assert!(is_safe_session_id("client_01-a"));
        assert!(is_safe_session_id("67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(is_safe_session_id("{67e55044-10b1-426f-9247-bb680e5fe0c8}"));
        assert!(is_safe_session_id(&"a".repeat(MAX_SESSION_ID_LEN)));

        assert!(!is_safe_session_id(""));
        assert!(!is_safe_session_id("abc\rdef"));
        assert!(!is_safe_session_id("abc\ndef"));
        assert!(!is_safe_session_id("a b"));
        assert!(!is_safe_session_id("../etc"));
        assert!(!is_safe_session_id(&"a".repeat(MAX_SESSION_ID_LEN + 1)));
    }

    #[test]
    fn test_query_wins_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert(SESSION_HEADER, HeaderValue::from_static("from-header"));
        assert_eq!(session_id(&query("from-query"), &headers), "from-query");
        assert_eq!(session_id(&SessionQuery::default(), &headers), "from-header");
    }

    #[test]
    fn test_unsafe_session_id_is_replaced() {
        let id = session_id(&query("abc\r\ndef"), &HeaderMap::new());
        assert!(Uuid::parse_str(&id).is_ok(), "id: {:?}", id);

        let mut headers = HeaderMap::new();
        headers.insert(SESSION_HEADER, HeaderValue::from_static("a;b"));
        let id = session_id(&SessionQuery::default(), &headers);
        assert!(Uuid::parse_str(&id).is_ok(), "id: {:?}", id);
    }

    #[test]
    fn test_missing_session_id_is_generated() {
        let id = session_id(&SessionQuery::default(), &HeaderMap::new());
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
