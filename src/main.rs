//! Word Cloud Server - Binary Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;

use word_cloud::api::http::create_router;
use word_cloud::api::websocket::AppState;
use word_cloud::config::ServerConfig;
use word_cloud::store::WordStore;
use word_cloud::types::ServerResult;

#[tokio::main]
async fn main() -> ServerResult<()> {
    let config = ServerConfig::from_env();

    let state = Arc::new(AppState::new(WordStore::new()));
    let app = create_router(state, &config)?;

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    eprintln!(
        "[Server] word-cloud v{} running at http://localhost:{}",
        word_cloud::VERSION,
        config.port
    );
    eprintln!("[Server] allowed origin: {}", config.allowed_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        eprintln!("[Server] shutting down");
    }
}
