//! Common types and utilities for the exchange test harness
//!
//! This library contains the types shared by the API client and the CLI:
//! wire-level request models for the remote exchange gateway, a unified
//! error type, and decimal/amount-scaling helpers.

pub mod decimal;
pub mod error;
pub mod model;

/// Re-export important types
pub use error::{Error, Result};
pub use decimal::*;
