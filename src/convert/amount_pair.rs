//! Synchronized token/fiat amount state
//!
//! One logical amount, two text representations. Exactly one side is
//! authoritative at any time: the side the user last typed into. That side
//! is modeled as a sum type holding the raw typed text, so "two sides both
//! authoritative" is unrepresentable rather than merely discouraged.

use crate::types::Unit;

/// The authoritative side of an amount pair and its raw typed text
///
/// `raw text` mirrors the most recent keystroke in the active unit after
/// separator normalization and (once convertible) group formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveEntry {
    /// The user is editing the token-unit field
    Token(String),

    /// The user is editing the fiat-unit field
    Fiat(String),
}

impl ActiveEntry {
    /// Create an entry for the given unit
    pub fn new(unit: Unit, text: impl Into<String>) -> Self {
        match unit {
            Unit::Token => ActiveEntry::Token(text.into()),
            Unit::Fiat => ActiveEntry::Fiat(text.into()),
        }
    }

    /// Which unit is being edited
    pub fn unit(&self) -> Unit {
        match self {
            ActiveEntry::Token(_) => Unit::Token,
            ActiveEntry::Fiat(_) => Unit::Fiat,
        }
    }

    /// The raw typed text on the active side
    pub fn text(&self) -> &str {
        match self {
            ActiveEntry::Token(text) | ActiveEntry::Fiat(text) => text,
        }
    }
}

/// State of one dual-unit amount pair
///
/// Owned exclusively by one converter instance. The non-active side's value
/// is always computed from the active side via the current exchange rate;
/// both values are valid formatted decimal strings or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountPair {
    entry: ActiveEntry,
    token_value: String,
    fiat_value: String,
}

impl AmountPair {
    /// Commit a new pair state as a single atomic update
    pub(crate) fn commit(entry: ActiveEntry, token_value: String, fiat_value: String) -> Self {
        AmountPair {
            entry,
            token_value,
            fiat_value,
        }
    }

    /// Which side the user is currently editing
    pub fn active_unit(&self) -> Unit {
        self.entry.unit()
    }

    /// The exact text last typed in the active unit
    pub fn raw_input(&self) -> &str {
        self.entry.text()
    }

    /// Formatted token-unit representation, or empty
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// Formatted fiat-unit representation, or empty
    pub fn fiat_value(&self) -> &str {
        &self.fiat_value
    }

    /// The text a field should display for the given unit
    ///
    /// The active side shows the raw input (what the user is typing); the
    /// other side shows its computed value.
    pub fn display_text(&self, unit: Unit) -> &str {
        if unit == self.active_unit() {
            self.raw_input()
        } else {
            match unit {
                Unit::Token => &self.token_value,
                Unit::Fiat => &self.fiat_value,
            }
        }
    }

    /// Whether both sides are currently empty
    pub fn is_empty(&self) -> bool {
        self.token_value.is_empty() && self.fiat_value.is_empty()
    }
}

impl Default for AmountPair {
    fn default() -> Self {
        AmountPair {
            entry: ActiveEntry::Token(String::new()),
            token_value: String::new(),
            fiat_value: String::new(),
        }
    }
}
