//! Data types for the word-cloud server
//!
//! This module contains the core data structures used throughout the application.

mod word;

pub use word::WordRecord;

/// Result type for server operations
pub type ServerResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
