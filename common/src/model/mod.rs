//! Wire models for the exchange gateway API

pub mod admin;
pub mod trade;
