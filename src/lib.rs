//! Realtime Word-Cloud Aggregator
//!
//! Clients submit words over a persistent WebSocket connection; the server
//! deduplicates them case-insensitively, increments occurrence counts,
//! assigns each distinct word a stable random on-screen position, and
//! broadcasts the full updated word set to every connected client.
//!
//! Everything lives in process memory: no persistence, no authentication,
//! no rooms, no capacity bounds.
//!
//! # Modules
//!
//! - `types`: Core data structures (WordRecord)
//! - `store`: In-memory word tally store
//! - `api`: HTTP router and WebSocket relay
//! - `config`: Environment-variable configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use word_cloud::api::http::create_router;
//! use word_cloud::api::websocket::AppState;
//! use word_cloud::config::ServerConfig;
//! use word_cloud::store::WordStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::from_env();
//!     let state = Arc::new(AppState::new(WordStore::new()));
//!     let app = create_router(state, &config).unwrap();
//!     let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
//!         .await
//!         .unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use api::websocket::{AppState, ClientEvent, ServerEvent};
pub use config::ServerConfig;
pub use store::WordStore;
pub use types::{ServerResult, WordRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
