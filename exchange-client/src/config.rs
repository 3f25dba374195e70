//! Configuration for the exchange client

use std::env;

/// Default gateway address, matching a locally run exchange
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8180/";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the exchange client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the exchange HTTP gateway
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: env::var("EXCHANGE_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout_secs: env::var("EXCHANGE_API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration using environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create a new configuration with an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
