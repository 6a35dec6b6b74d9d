//! WebSocket application state

use parking_lot::Mutex;
use tokio::sync::broadcast;

use super::events::ServerEvent;
use crate::store::WordStore;

/// Shared application state for WebSocket connections.
///
/// The store sits behind one mutex, and the whole record-snapshot-broadcast
/// sequence runs inside it, so submissions are strictly serialized and
/// snapshots go out in the order they were taken.
pub struct AppState {
    /// The word tally store
    store: Mutex<WordStore>,

    /// Broadcast channel for sending events to all connected clients
    event_tx: broadcast::Sender<ServerEvent>,
}

impl AppState {
    /// Create a new AppState owning the given store
    pub fn new(store: WordStore) -> Self {
        // Buffer 1024 events - a lagged client just picks up the next
        // broadcast, since every broadcast carries the full word set
        let (event_tx, _) = broadcast::channel(1024);

        Self {
            store: Mutex::new(store),
            event_tx,
        }
    }

    /// Handle one word submission: record it, then broadcast the full
    /// updated word set to every connected client, sender included.
    pub fn submit(&self, word: &str) {
        // The send stays inside the lock scope: it is synchronous, and
        // releasing first would let a newer snapshot overtake an older one
        let mut store = self.store.lock();
        store.record(word);
        let snapshot = store.snapshot();

        // Ignore send errors - they just mean no receivers are listening
        let _ = self.event_tx.send(ServerEvent::UpdatedWordArray(snapshot));
    }

    /// Number of distinct words recorded so far
    pub fn word_count(&self) -> usize {
        self.store.lock().len()
    }

    /// Subscribe to receive broadcast events
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.event_tx.subscribe()
    }
}
