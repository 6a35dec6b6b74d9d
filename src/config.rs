//! Server configuration from environment variables
//!
//! Only two knobs exist: the listening port and the single allowed CORS
//! origin. Everything else is fixed behavior.

use std::env;

/// Default listening port (the reference deployment)
pub const DEFAULT_PORT: u16 = 5000;

/// Default allowed CORS origin (the word-cloud frontend dev server)
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Runtime configuration for the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `WORDCLOUD_PORT` and `WORDCLOUD_ALLOWED_ORIGIN`,
    /// falling back to defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        let port = match env::var("WORDCLOUD_PORT") {
            Ok(value) => match value.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    eprintln!(
                        "[Server] WARNING: invalid WORDCLOUD_PORT {:?}, using {}",
                        value, DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            Err(_) => DEFAULT_PORT,
        };

        let allowed_origin = env::var("WORDCLOUD_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());

        Self {
            port,
            allowed_origin,
        }
    }
}
