//! Token and unit types for amount entry
//!
//! This module defines the token descriptor used to cap decimal precision
//! on the token side of an amount pair, and the unit tag that identifies
//! which side of the pair is being edited.

use serde::{Deserialize, Serialize};

/// Number of fractional digits used for fiat values
///
/// Fiat representations are fixed at two decimal places throughout the crate.
pub const FIAT_DECIMALS: u32 = 2;

/// The two sides of a dual-unit amount pair
///
/// Every amount entered in a transaction form is represented twice: once in
/// the token's native unit and once in the configured fiat currency. `Unit`
/// identifies which side an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// The token's native denomination, capped at the token's decimal precision
    Token,

    /// The fiat currency representation, fixed at two decimal places
    Fiat,
}

/// Descriptor for a token whose amounts are being entered
///
/// The `decimals` field is the hard precision cap for token-unit values:
/// input with more fractional digits than this is rejected at the keystroke
/// level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Ticker symbol, e.g. "TON" or "USDT"
    pub symbol: String,

    /// Maximum number of fractional digits for token-unit amounts
    pub decimals: u32,
}

impl TokenInfo {
    /// Create a new token descriptor
    pub fn new(symbol: impl Into<String>, decimals: u32) -> Self {
        TokenInfo {
            symbol: symbol.into(),
            decimals,
        }
    }
}
