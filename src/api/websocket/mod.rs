//! WebSocket module for realtime word-cloud updates
//!
//! Provides the WebSocket endpoint at `/ws`. Every `submitWord` event from
//! any client triggers a broadcast of the full current word set to all
//! connected clients under `updatedWordArray`.

pub mod events;
pub mod handler;
pub mod state;

pub use events::{ClientEvent, ServerEvent};
pub use state::AppState;
