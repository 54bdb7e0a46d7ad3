//! Per-keystroke dual-unit amount conversion
//!
//! `DualUnitAmountConverter` keeps one token-unit field and one fiat-unit
//! field representing the same logical amount consistent through a live
//! exchange rate. It behaves as a masked numeric input: malformed or
//! over-precision keystrokes are silently dropped and the field state does
//! not advance.

use crate::convert::amount_pair::{ActiveEntry, AmountPair};
use crate::format::AmountFormatter;
use crate::rate::effective_rate;
use crate::types::{TokenInfo, Unit, FIAT_DECIMALS};
use rust_decimal::Decimal;

/// Converter for one token/fiat amount pair
///
/// Owns the pair state exclusively. All arithmetic is performed on
/// `Decimal` values with checked operations; display rounding is half-even
/// at the unit's decimal cap (token side: `token.decimals`, fiat side: 2).
#[derive(Debug, Clone)]
pub struct DualUnitAmountConverter {
    token: TokenInfo,
    rate: Decimal,
    formatter: AmountFormatter,
    state: AmountPair,
    focused: bool,
    touched: bool,
}

impl DualUnitAmountConverter {
    /// Create a converter with the default locale formatter
    ///
    /// A missing or non-positive `rate` degrades conversion to a 1:1
    /// passthrough rather than failing.
    pub fn new(token: TokenInfo, rate: Option<Decimal>) -> Self {
        Self::with_formatter(token, rate, AmountFormatter::default())
    }

    /// Create a converter with an explicit locale formatter
    pub fn with_formatter(
        token: TokenInfo,
        rate: Option<Decimal>,
        formatter: AmountFormatter,
    ) -> Self {
        DualUnitAmountConverter {
            token,
            rate: effective_rate(rate),
            formatter,
            state: AmountPair::default(),
            focused: false,
            touched: false,
        }
    }

    /// The token whose amounts are being entered
    pub fn token(&self) -> &TokenInfo {
        &self.token
    }

    /// The conversion rate currently in effect (fiat per token unit)
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Current pair state
    pub fn state(&self) -> &AmountPair {
        &self.state
    }

    /// Whether either field of the pair has focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the pair has been blurred at least once after interaction
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Handle a keystroke in one of the two fields
    ///
    /// Empty text clears both sides. Malformed or over-precision input is
    /// silently rejected. Convertible input updates both sides atomically:
    /// the entered side is group-formatted and the cross value is computed
    /// through the current rate.
    pub fn on_input(&mut self, unit: Unit, text: &str) {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            self.state = AmountPair::commit(
                ActiveEntry::new(unit, ""),
                String::new(),
                String::new(),
            );
            return;
        }

        let cap = self.decimals_for(unit);
        if let Err(rejection) = self.formatter.check(trimmed, cap) {
            tracing::trace!(input = trimmed, %rejection, "rejected amount keystroke");
            return;
        }

        let canonical = self.formatter.normalize(trimmed);

        // mid-entry text (trailing separator, lone ".") commits the raw
        // input but leaves the computed values untouched
        if !self.formatter.is_numeric(&canonical) || canonical.ends_with('.') {
            self.state = AmountPair::commit(
                ActiveEntry::new(unit, self.formatter.display(&canonical)),
                self.state.token_value().to_string(),
                self.state.fiat_value().to_string(),
            );
            return;
        }

        let Some(entered) = self.formatter.parse(&canonical) else {
            return;
        };

        let grouped = self.formatter.group(&canonical);
        let (token_value, fiat_value) = match unit {
            Unit::Token => {
                let Some(fiat) = entered.checked_mul(self.rate) else {
                    tracing::trace!(input = trimmed, "conversion overflow, keystroke dropped");
                    return;
                };
                (
                    grouped.clone(),
                    self.formatter.format_fixed(fiat, FIAT_DECIMALS),
                )
            }
            Unit::Fiat => {
                let Some(token) = entered.checked_div(self.rate) else {
                    tracing::trace!(input = trimmed, "conversion overflow, keystroke dropped");
                    return;
                };
                (
                    self.formatter.format(token, self.token.decimals),
                    grouped.clone(),
                )
            }
        };

        self.state = AmountPair::commit(ActiveEntry::new(unit, grouped), token_value, fiat_value);
    }

    /// Handle one of the two fields gaining focus
    ///
    /// Switching the active unit re-seeds the newly focused field's editable
    /// text from its own computed value without running a reconversion: the
    /// previously inactive side is a display value, not a source of truth,
    /// until the user actually types into it.
    pub fn on_focus(&mut self, unit: Unit) {
        self.focused = true;
        if unit != self.state.active_unit() {
            let seed = match unit {
                Unit::Token => self.state.token_value().to_string(),
                Unit::Fiat => self.state.fiat_value().to_string(),
            };
            self.state = AmountPair::commit(
                ActiveEntry::new(unit, seed),
                self.state.token_value().to_string(),
                self.state.fiat_value().to_string(),
            );
        }
    }

    /// Handle a field losing focus
    ///
    /// `focus_moved_to` is the field of this pair that now has focus, if
    /// any. Blur is suppressed while focus moves between the pair's own two
    /// fields; only once focus leaves both does the pair commit its blur
    /// side-effect (marking itself touched). Returns whether the blur
    /// committed.
    pub fn on_blur(&mut self, focus_moved_to: Option<Unit>) -> bool {
        if focus_moved_to.is_some() {
            return false;
        }
        self.focused = false;
        self.touched = true;
        true
    }

    /// Replace the exchange rate and re-derive the computed side
    ///
    /// The authoritative side's text is replayed through the new rate so the
    /// computed side stays consistent. Missing or non-positive rates degrade
    /// to 1:1 as in the constructor.
    pub fn set_rate(&mut self, rate: Option<Decimal>) {
        self.rate = effective_rate(rate);
        let raw = self.state.raw_input().to_string();
        if !raw.is_empty() {
            self.on_input(self.state.active_unit(), &raw);
        }
    }

    fn decimals_for(&self, unit: Unit) -> u32 {
        match unit {
            Unit::Token => self.token.decimals,
            Unit::Fiat => FIAT_DECIMALS,
        }
    }
}
