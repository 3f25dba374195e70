//! Admin API request models
//!
//! Bodies for the user, asset, symbol, and funding endpoints. Field names
//! follow the gateway's JSON casing (camelCase) exactly; anything else is
//! silently ignored or rejected on the remote side.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decimal::{dec, scaled_amount, Fee, Price, Quantity};
use crate::error::{Error, Result};

/// Create-user body; the gateway accepts any uid without uniqueness checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Numeric user id
    pub uid: i64,
}

/// Asset registration body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Ticker code, e.g. "BTC"
    pub asset_code: String,
    /// Numeric asset id
    pub asset_id: i32,
    /// Decimal places used when scaling logical amounts for this asset
    pub scale: u32,
}

/// Symbol kind understood by the matching core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolType {
    /// Plain currency pair (wire code 0)
    CurrencyExchangePair = 0,
    /// Futures contract (wire code 1)
    FuturesContract = 1,
}

impl Serialize for SymbolType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for SymbolType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            0 => Ok(SymbolType::CurrencyExchangePair),
            1 => Ok(SymbolType::FuturesContract),
            other => Err(serde::de::Error::custom(format!(
                "unknown symbol type code: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolType::CurrencyExchangePair => write!(f, "pair"),
            SymbolType::FuturesContract => write!(f, "futures"),
        }
    }
}

impl FromStr for SymbolType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pair" | "0" => Ok(SymbolType::CurrencyExchangePair),
            "futures" | "1" => Ok(SymbolType::FuturesContract),
            other => Err(Error::ValidationError(format!(
                "unknown symbol type: {}",
                other
            ))),
        }
    }
}

/// Static configuration of one tradable symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolSpec {
    /// Numeric symbol id
    pub symbol_id: i32,
    /// Symbol code, e.g. "BTCUSDT"
    pub symbol_code: String,
    /// Symbol kind
    pub symbol_type: SymbolType,
    /// Base asset code
    pub base_asset: String,
    /// Quote currency code
    pub quote_currency: String,
    /// Minimum tradable quantity step (lot)
    pub lot_size: Quantity,
    /// Minimum price step
    pub step_size: Price,
    /// Taker fee rate
    pub taker_fee: Fee,
    /// Maker fee rate
    pub maker_fee: Fee,
    /// Margin requirement for buys
    pub margin_buy: Fee,
    /// Margin requirement for sells
    pub margin_sell: Fee,
    /// Upper limit for order prices
    pub price_high_limit: Price,
    /// Lower limit for order prices
    pub price_low_limit: Price,
}

impl Default for SymbolSpec {
    /// The BTC/USDT pair a manual test session registers
    fn default() -> Self {
        Self {
            symbol_id: 1,
            symbol_code: "BTCUSDT".to_string(),
            symbol_type: SymbolType::CurrencyExchangePair,
            base_asset: "BTC".to_string(),
            quote_currency: "USDT".to_string(),
            lot_size: dec!(1),
            step_size: dec!(1),
            taker_fee: Fee::ZERO,
            maker_fee: Fee::ZERO,
            margin_buy: Fee::ZERO,
            margin_sell: Fee::ZERO,
            price_high_limit: dec!(10000000),
            price_low_limit: dec!(0.000001),
        }
    }
}

/// Account funding body
///
/// `transaction_id` is the caller-unique token the gateway deduplicates on;
/// a replayed id is rejected instead of applied twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    /// Caller-unique transaction id
    pub transaction_id: i64,
    /// Scaled integer amount (`logical * 10^scale`)
    pub amount: i64,
    /// Asset code to credit
    pub currency: String,
}

impl DepositRequest {
    /// Build a funding body from a logical amount and the asset's scale
    pub fn new(
        transaction_id: i64,
        currency: impl Into<String>,
        logical_amount: i64,
        scale: u32,
    ) -> Result<Self> {
        let amount = scaled_amount(logical_amount, scale).ok_or_else(|| {
            Error::ValidationError(format!(
                "amount {} at scale {} overflows the wire integer",
                logical_amount, scale
            ))
        })?;
        Ok(Self {
            transaction_id,
            amount,
            currency: currency.into(),
        })
    }
}
