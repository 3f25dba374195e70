//! Decimal type utilities and amount scaling
//!
//! The exchange core works on scaled integers: a logical amount of an asset
//! is multiplied by `10^scale` before it goes on the wire. Genuinely
//! fractional values (fee rates, price limits) stay `Decimal`.

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Price type with high precision
pub type Price = Decimal;

/// Quantity type with high precision
pub type Quantity = Decimal;

/// Fee or margin rate with high precision
pub type Fee = Decimal;

/// `10^scale` as an `i64`, if it fits
pub fn pow10(scale: u32) -> Option<i64> {
    10i64.checked_pow(scale)
}

/// Convert a logical amount into the scaled integer the exchange expects
/// (`logical * 10^scale`), refusing to overflow
pub fn scaled_amount(logical: i64, scale: u32) -> Option<i64> {
    pow10(scale).and_then(|factor| logical.checked_mul(factor))
}
