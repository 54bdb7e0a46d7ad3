//! Exchange-rate lookup for dual-unit conversion
//!
//! The converter only needs one number from the outside world: how much fiat
//! one unit of the token is worth. The `RateProvider` trait is that seam.
//! Rates may be stale or momentarily unavailable; conversion then degrades
//! to a 1:1 passthrough instead of failing, so the input stays usable.

use rust_decimal::Decimal;
use std::collections::HashMap;

/// Source of fiat-per-token exchange rates
///
/// Implementations may be backed by a live price feed, a cache, or a fixed
/// table. Returning `None` (or a non-positive rate) is always safe: callers
/// substitute the identity rate.
pub trait RateProvider {
    /// Current exchange rate (fiat per one token unit) for a token identifier
    fn rate(&self, token_symbol: &str) -> Option<Decimal>;
}

/// Fixed-table rate provider
///
/// Useful for tests and for wallets that refresh a rate snapshot out of
/// band and hand it to the form layer.
#[derive(Debug, Clone, Default)]
pub struct FixedRateProvider {
    rates: HashMap<String, Decimal>,
}

impl FixedRateProvider {
    /// Create an empty provider (every lookup degrades to identity)
    pub fn new() -> Self {
        FixedRateProvider {
            rates: HashMap::new(),
        }
    }

    /// Builder-style insertion of a rate
    pub fn with_rate(mut self, token_symbol: impl Into<String>, rate: Decimal) -> Self {
        self.rates.insert(token_symbol.into(), rate);
        self
    }

    /// Insert or replace a rate
    pub fn set_rate(&mut self, token_symbol: impl Into<String>, rate: Decimal) {
        self.rates.insert(token_symbol.into(), rate);
    }
}

impl RateProvider for FixedRateProvider {
    fn rate(&self, token_symbol: &str) -> Option<Decimal> {
        self.rates.get(token_symbol).copied()
    }
}

/// Clamp a possibly-missing rate to a usable conversion factor
///
/// Missing and non-positive rates degrade to 1, turning fiat conversion
/// into a passthrough rather than an error.
pub fn effective_rate(rate: Option<Decimal>) -> Decimal {
    match rate {
        Some(rate) if rate > Decimal::ZERO => rate,
        other => {
            tracing::debug!(rate = ?other, "exchange rate unavailable, falling back to 1:1");
            Decimal::ONE
        }
    }
}
