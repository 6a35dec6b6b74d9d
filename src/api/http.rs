//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use super::websocket::{handler::ws_handler, state::AppState};
use crate::config::ServerConfig;
use crate::types::ServerResult;

/// Create the Axum router with all endpoints.
///
/// Fails if the configured origin is not a valid header value; a typo there
/// should stop the server at startup rather than loosen CORS.
pub fn create_router(state: Arc<AppState>, config: &ServerConfig) -> ServerResult<Router> {
    // Cross-origin access is restricted to the single configured origin
    let origin: HeaderValue = config
        .allowed_origin
        .parse()
        .map_err(|_| format!("invalid allowed origin {:?}", config.allowed_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        // Liveness check, not part of the realtime contract
        .route("/", get(welcome))
        // WebSocket endpoint
        .route("/ws", get(ws_handler))
        // Health check
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(state))
}

/// Welcome endpoint
async fn welcome() -> &'static str {
    "Welcome 👋, word cloud server is running ✨"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
