//! In-memory word tally store
//!
//! Holds every distinct word seen so far, keyed case-insensitively. The store
//! has no interior locking: the relay wraps it in a single mutex held across
//! record, snapshot, and broadcast, and the store can be tested in
//! isolation.

use crate::types::WordRecord;

/// In-process collection of word records, in first-seen order
#[derive(Debug, Default)]
pub struct WordStore {
    words: Vec<WordRecord>,
}

impl WordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Record one submission of `input`.
    ///
    /// The input is normalized (trim + lowercase) and used as the dedup key.
    /// A known word has its count incremented in place; an unseen word gets a
    /// new record appended with count 1, a random position, and a fresh id.
    /// Whitespace-only input normalizes to the empty string, which is a valid
    /// (if degenerate) key like any other.
    pub fn record(&mut self, input: &str) {
        let normalized = input.trim().to_lowercase();
        if let Some(word) = self.words.iter_mut().find(|w| w.text == normalized) {
            word.count += 1;
        } else {
            self.words.push(WordRecord::new(normalized));
        }
    }

    /// Full clone of the current records, in insertion order
    pub fn snapshot(&self) -> Vec<WordRecord> {
        self.words.clone()
    }

    /// Number of distinct words seen
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
