//! Locale-aware numeric formatting and parsing for amount input
//!
//! This module provides the `AmountFormatter`, the single authority for how
//! amount text moves between what the user types, the canonical decimal
//! representation used for arithmetic, and the grouped display string shown
//! in the field.
//!
//! # Canonical form
//!
//! `normalize` converts typed text to canonical form: group separators are
//! stripped and the decimal separator becomes `.`. A typed `,` or `.` both
//! register as the decimal separator as long as the character is not the
//! locale's group separator. `check` validates the raw typed text against
//! the same locale rules, so rejection reasons refer to what the user
//! actually typed.
//!
//! # Rounding
//!
//! All display rounding uses half-even (banker's) rounding,
//! `RoundingStrategy::MidpointNearestEven`. This is a fixed contract, not an
//! implementation detail: repeated token/fiat reconversions must not drift
//! beyond rounding at the unit's decimal cap.

use crate::types::InputRejection;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Decimal and group separator pair for a locale
///
/// The default renders the common `1,234.56` style. Locales that swap the
/// separators (e.g. `1.234,56`) are configured by constructing the pair
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleFormat {
    /// Character separating the integer and fractional parts
    pub decimal_separator: char,

    /// Character grouping the integer part into thousands
    pub group_separator: char,
}

impl LocaleFormat {
    /// Create a locale separator pair
    pub fn new(decimal_separator: char, group_separator: char) -> Self {
        LocaleFormat {
            decimal_separator,
            group_separator,
        }
    }
}

impl Default for LocaleFormat {
    fn default() -> Self {
        LocaleFormat::new('.', ',')
    }
}

/// Deterministic, locale-aware amount formatter and parser
///
/// Owns no state beyond the locale separators; all methods are pure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountFormatter {
    locale: LocaleFormat,
}

impl AmountFormatter {
    /// Create a formatter for the given locale
    pub fn new(locale: LocaleFormat) -> Self {
        AmountFormatter { locale }
    }

    /// The locale this formatter renders for
    pub fn locale(&self) -> LocaleFormat {
        self.locale
    }

    /// Whether a typed character registers as a decimal separator
    ///
    /// The locale's own decimal separator always does. The alternate
    /// separator (`,` when the locale uses `.`, and vice versa) also does,
    /// unless it is claimed by the locale as the group separator.
    fn is_decimal_separator(&self, ch: char) -> bool {
        if ch == self.locale.decimal_separator {
            return true;
        }
        let alternate = match self.locale.decimal_separator {
            '.' => ',',
            _ => '.',
        };
        ch == alternate && alternate != self.locale.group_separator
    }

    /// Normalize typed text into canonical form
    ///
    /// Trims surrounding whitespace, strips group separators, and maps the
    /// decimal separator to `.`. The result is directly parseable and is the
    /// form all other canonical-text methods expect.
    pub fn normalize(&self, text: &str) -> String {
        text.trim()
            .chars()
            .filter(|ch| *ch != self.locale.group_separator)
            .map(|ch| if self.is_decimal_separator(ch) { '.' } else { ch })
            .collect()
    }

    /// Syntactically validate raw typed text against a precision cap
    ///
    /// Accepts digits, at most one decimal separator, and group separators
    /// in the integer part. A lone decimal separator is accepted as the
    /// start of a fractional entry. Returns the rejection reason otherwise;
    /// callers that implement masked input swallow it.
    pub fn check(&self, text: &str, max_decimals: u32) -> Result<(), InputRejection> {
        let mut seen_point = false;
        let mut fractional_digits: u32 = 0;
        let mut has_digit = false;
        let mut only_separator = true;

        for ch in text.trim().chars() {
            if ch.is_ascii_digit() {
                has_digit = true;
                only_separator = false;
                if seen_point {
                    fractional_digits += 1;
                }
            } else if self.is_decimal_separator(ch) {
                if seen_point {
                    return Err(InputRejection::MultipleSeparators);
                }
                seen_point = true;
            } else if ch == self.locale.group_separator {
                only_separator = false;
                if seen_point {
                    return Err(InputRejection::MisplacedGroupSeparator);
                }
            } else {
                return Err(InputRejection::invalid_character(ch));
            }
        }

        if !has_digit && !(seen_point && only_separator) {
            return Err(InputRejection::MissingDigits);
        }

        if fractional_digits > max_decimals {
            return Err(InputRejection::too_many_fractional_digits(
                fractional_digits,
                max_decimals,
            ));
        }

        Ok(())
    }

    /// Whether canonical text denotes a number
    ///
    /// Requires at least one digit and at most one decimal point. A trailing
    /// decimal point is still numeric here; whether a conversion may run on
    /// it is a separate mid-entry check.
    pub fn is_numeric(&self, canonical: &str) -> bool {
        let mut seen_point = false;
        let mut has_digit = false;
        for ch in canonical.chars() {
            if ch.is_ascii_digit() {
                has_digit = true;
            } else if ch == '.' {
                if seen_point {
                    return false;
                }
                seen_point = true;
            } else {
                return false;
            }
        }
        has_digit
    }

    /// Parse canonical text into a `Decimal`
    ///
    /// Returns `None` for text that does not denote a number.
    pub fn parse(&self, canonical: &str) -> Option<Decimal> {
        if !self.is_numeric(canonical) {
            return None;
        }
        let mut padded = canonical.to_string();
        if padded.starts_with('.') {
            padded.insert(0, '0');
        }
        if padded.ends_with('.') {
            padded.pop();
        }
        Decimal::from_str(&padded).ok()
    }

    /// Format a value rounded to `decimals`, trimming trailing zeros
    ///
    /// Used for the token side: whole amounts render as `10`, not
    /// `10.000000000`. Rounding is half-even.
    pub fn format(&self, value: Decimal, decimals: u32) -> String {
        let rounded = value
            .round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven)
            .normalize();
        self.render(&rounded.to_string())
    }

    /// Format a value rounded to exactly `decimals` fractional digits
    ///
    /// Used for the fiat side: values always render with the full fractional
    /// width, e.g. `30.00`. Rounding is half-even.
    pub fn format_fixed(&self, value: Decimal, decimals: u32) -> String {
        let rounded =
            value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven);
        self.render(&format!("{:.prec$}", rounded, prec = decimals as usize))
    }

    /// Apply locale grouping to canonical text without rounding
    ///
    /// Preserves the typed fractional digits verbatim (including trailing
    /// zeros the user has typed), so re-rendering the active field never
    /// changes the digits the user sees mid-entry.
    pub fn group(&self, canonical: &str) -> String {
        self.render(canonical)
    }

    /// Render canonical text with the locale decimal separator, no grouping
    ///
    /// Used for mid-entry text such as `1234.` where grouping is withheld
    /// until the value is complete enough to convert.
    pub fn display(&self, canonical: &str) -> String {
        canonical
            .chars()
            .map(|ch| {
                if ch == '.' {
                    self.locale.decimal_separator
                } else {
                    ch
                }
            })
            .collect()
    }

    /// Render a plain `1234.56`-style string with locale separators
    fn render(&self, plain: &str) -> String {
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain),
        };
        let grouped = match unsigned.split_once('.') {
            Some((integer, fraction)) => {
                let mut out = self.group_integer(integer);
                out.push(self.locale.decimal_separator);
                out.push_str(fraction);
                out
            }
            None => self.group_integer(unsigned),
        };
        format!("{}{}", sign, grouped)
    }

    fn group_integer(&self, integer: &str) -> String {
        let len = integer.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, ch) in integer.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.locale.group_separator);
            }
            out.push(ch);
        }
        out
    }
}
