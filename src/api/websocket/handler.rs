//! WebSocket connection handler

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use tokio::sync::broadcast;

use super::events::ClientEvent;
use super::state::AppState;

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an individual WebSocket connection
async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    // Subscribe to broadcast events. No initial state push: this client
    // sees data on the next submission, not before.
    let mut rx = state.subscribe();

    eprintln!("[Ws] client connected");

    loop {
        tokio::select! {
            // Broadcast events to client
            result = rx.recv() => {
                match result {
                    Ok(msg) => {
                        if let Ok(json) = serde_json::to_string(&msg) {
                            if socket.send(Message::Text(json)).await.is_err() {
                                break; // Client disconnected
                            }
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(_)) => {
                        // Missed broadcasts are harmless: the next one
                        // carries the full word set anyway
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        break; // Channel closed
                    }
                }
            }

            // Handle client messages
            result = socket.recv() => {
                match result {
                    Some(Ok(msg)) => {
                        if !handle_client_message(msg, &state, &mut socket).await {
                            break; // Client requested close
                        }
                    }
                    Some(Err(_)) => break, // WebSocket error
                    None => break, // Client disconnected
                }
            }
        }
    }

    eprintln!("[Ws] client disconnected");
}

/// Handle a message from the client
/// Returns false if the connection should be closed
async fn handle_client_message(msg: Message, state: &AppState, socket: &mut WebSocket) -> bool {
    match msg {
        Message::Text(text) => {
            // A payload that doesn't parse as a known event is dropped;
            // it must not affect the connection or other clients
            if let Ok(ClientEvent::SubmitWord(word)) = serde_json::from_str(&text) {
                state.submit(&word);
                eprintln!("[Ws] word: {} ({} distinct)", word, state.word_count());
            }
            true
        }
        Message::Binary(_) => true, // Ignore binary messages
        Message::Ping(data) => {
            let _ = socket.send(Message::Pong(data)).await;
            true
        }
        Message::Pong(_) => true, // Ignore pong responses
        Message::Close(_) => false, // Client requested close
    }
}
