//! HTTP client for the exchange gateway's synchronous APIs
//!
//! One method per remote endpoint, split across the admin tree
//! (`syncAdminApi`) and the trade tree (`syncTradeApi`). Every call builds
//! its body, performs a single request, and returns the parsed reply;
//! nothing is retried and responses stay opaque JSON.

pub mod client;
pub mod config;
pub mod fixtures;
pub mod txid;

/// Re-export important types
pub use client::{ApiResponse, ExchangeClient};
pub use config::ClientConfig;
pub use fixtures::Bootstrap;
pub use txid::TxIdSource;
