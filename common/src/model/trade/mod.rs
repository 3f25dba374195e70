//! Trade API request models
//!
//! Order bodies plus the numeric side and time-in-force codes the matching
//! core speaks. The codes are closed enums, so a value outside {0, 1} cannot
//! be constructed, serialized, or parsed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Order side: 0 = ask (sell), 1 = bid (buy)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Sell side (wire code 0)
    Ask = 0,
    /// Buy side (wire code 1)
    Bid = 1,
}

impl Serialize for OrderAction {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for OrderAction {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            0 => Ok(OrderAction::Ask),
            1 => Ok(OrderAction::Bid),
            other => Err(serde::de::Error::custom(format!(
                "unknown order action code: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderAction::Ask => write!(f, "ask"),
            OrderAction::Bid => write!(f, "bid"),
        }
    }
}

impl FromStr for OrderAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ask" | "sell" | "0" => Ok(OrderAction::Ask),
            "bid" | "buy" | "1" => Ok(OrderAction::Bid),
            other => Err(Error::ValidationError(format!(
                "unknown order action: {}",
                other
            ))),
        }
    }
}

/// Order time in force: 0 = good till cancelled, 1 = immediate or cancel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    /// Good till cancelled (wire code 0)
    GTC = 0,
    /// Immediate or cancel (wire code 1)
    IOC = 1,
}

impl Serialize for OrderType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for OrderType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            0 => Ok(OrderType::GTC),
            1 => Ok(OrderType::IOC),
            other => Err(serde::de::Error::custom(format!(
                "unknown order type code: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::GTC => write!(f, "gtc"),
            OrderType::IOC => write!(f, "ioc"),
        }
    }
}

impl FromStr for OrderType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "gtc" | "0" => Ok(OrderType::GTC),
            "ioc" | "1" => Ok(OrderType::IOC),
            other => Err(Error::ValidationError(format!(
                "unknown order type: {}",
                other
            ))),
        }
    }
}

/// Order placement body; symbol and uid travel in the URL path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    /// Limit price in scaled price units
    pub price: i64,
    /// Order size in lots
    pub size: i64,
    /// Caller-chosen cookie echoed back in order events
    pub user_cookie: i64,
    /// Order side
    pub action: OrderAction,
    /// Time in force
    pub order_type: OrderType,
}

/// Order cancellation body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    /// Order to cancel
    pub order_id: i64,
    /// Symbol the order rests on
    pub symbol: String,
    /// Owner uid
    pub uid: i64,
}

/// Order price-move body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOrderRequest {
    /// Order to move
    pub order_id: i64,
    /// Symbol the order rests on
    pub symbol: String,
    /// Owner uid
    pub uid: i64,
    /// Replacement limit price in scaled price units
    pub price: i64,
}
