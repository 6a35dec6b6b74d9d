//! Word record type for the word cloud

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One distinct word in the cloud, with its occurrence count and display position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordRecord {
    /// Normalized (trimmed, lowercased) word, unique within the store
    pub text: String,
    pub count: u64,
    /// Horizontal position, percent of container width, in [10, 90)
    pub x: f64,
    /// Vertical position, percent of container height, in [15, 85)
    pub y: f64,
    pub id: String,
}

impl WordRecord {
    /// Create a record for a newly seen word with count 1, a freshly drawn
    /// random position, and a fresh id. `text` must already be normalized.
    pub fn new(text: String) -> Self {
        let mut rng = rand::rng();
        Self {
            text,
            count: 1,
            // 10% to 90% of container width, 15% to 85% of height.
            // Independent draws, no collision avoidance.
            x: rng.random_range(10.0..90.0),
            y: rng.random_range(15.0..85.0),
            id: generate_id(&mut rng),
        }
    }
}

/// Millisecond timestamp plus a random hex suffix. Unique enough for all
/// records alive in one process; never parsed, only compared.
fn generate_id(rng: &mut impl Rng) -> String {
    format!("{}-{:08x}", Utc::now().timestamp_millis(), rng.random::<u32>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_starts_at_one() {
        let record = WordRecord::new("hello".to_string());
        assert_eq!(record.text, "hello");
        assert_eq!(record.count, 1);
    }

    #[test]
    fn test_position_within_bounds() {
        for _ in 0..200 {
            let record = WordRecord::new("w".to_string());
            assert!(record.x >= 10.0 && record.x < 90.0, "x out of range: {}", record.x);
            assert!(record.y >= 15.0 && record.y < 85.0, "y out of range: {}", record.y);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: Vec<String> = (0..100)
            .map(|_| WordRecord::new("w".to_string()).id)
            .collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_serialization_shape() {
        let record = WordRecord::new("hello".to_string());
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("text").is_some());
        assert!(json.get("count").is_some());
        assert!(json.get("x").is_some());
        assert!(json.get("y").is_some());
        assert!(json.get("id").is_some());
    }
}
