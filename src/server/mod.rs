//! HTTP adapter
//!
//! Serves the analyzer, the writing guide and the MCP tools over HTTP with
//! permissive CORS. All handlers share one analyzer through [`AppState`].

pub mod api;
pub mod transport;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::detect::SlopAnalyzer;
use crate::mcp::McpInterface;

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SlopAnalyzer>,
    pub mcp: Arc<McpInterface>,
}

impl AppState {
    pub fn new(analyzer: Arc<SlopAnalyzer>) -> Self {
        let mcp = Arc::new(McpInterface::new(analyzer.clone()));
        Self { analyzer, mcp }
    }
}

fn cors_layer() -> CorsLayer {
    let session = HeaderName::from_static(transport::SESSION_HEADER);
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, session.clone()])
        .expose_headers([session])
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::server_info))
        .route("/api/check", post(api::check))
        .route("/api/rules", get(api::rules))
        .route("/api/examples", get(api::examples))
        .route(
            "/mcp",
            get(transport::handle_mcp_sse).post(transport::handle_mcp_post),
        )
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `host:port` and serve until Ctrl-C.
pub async fn serve(host: &str, port: u16, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("talkhuman listening on http://{}", listener.local_addr()?);
    tracing::info!("  POST /api/check, GET /api/rules, GET /api/examples, /mcp");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
