//! WebSocket event types for realtime word-cloud updates

use serde::{Deserialize, Serialize};

use crate::types::WordRecord;

/// Events a client may send over the socket
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "camelCase")]
pub enum ClientEvent {
    /// One word submission
    SubmitWord(String),
}

/// Events the server broadcasts to every connected client
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Full current word set, in first-seen order, sent after each submission
    UpdatedWordArray(Vec<WordRecord>),
}
