//! Error types for the exchange test harness
//!
//! This module provides a unified error type for the client library and the
//! CLI. The remote gateway is the only external collaborator, so transport
//! failures, rejected calls, and undecodable bodies cover the whole taxonomy.

use thiserror::Error;

/// Harness error type
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (connection refused, DNS, protocol)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status; the raw body is kept
    /// verbatim as the only diagnostic the remote side gives us
    #[error("API error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Generic validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
