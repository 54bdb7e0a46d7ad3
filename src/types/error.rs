//! Syntactic rejection reasons for amount input
//!
//! Amount fields behave as masked numeric inputs: a keystroke that would
//! produce a malformed or over-precision value is silently dropped and the
//! field state does not advance. The rejection reason is still modeled as a
//! proper error type so the syntactic checker can be exercised directly and
//! embedders can log or inspect why input was ignored.

use thiserror::Error;

/// Reason a keystroke was rejected by the amount input mask
///
/// These never surface to the user; the converter swallows them and leaves
/// the field unchanged. They are observable through
/// [`AmountFormatter::check`](crate::format::AmountFormatter::check).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputRejection {
    /// A character that is neither a digit nor a recognized separator
    #[error("invalid character '{character}' in amount input")]
    InvalidCharacter {
        /// The offending character
        character: char,
    },

    /// More than one decimal separator in the input
    #[error("more than one decimal separator in amount input")]
    MultipleSeparators,

    /// A group separator appearing after the decimal separator
    #[error("group separator after the decimal separator")]
    MisplacedGroupSeparator,

    /// Input that contains no digits at all
    ///
    /// A lone decimal separator is permitted (the user is starting a
    /// fractional entry); anything else without digits is rejected.
    #[error("amount input contains no digits")]
    MissingDigits,

    /// More fractional digits than the unit's precision cap allows
    #[error("amount has {actual} fractional digits, at most {allowed} allowed")]
    TooManyFractionalDigits {
        /// Fractional digits present in the input
        actual: u32,
        /// Maximum allowed by the unit being edited
        allowed: u32,
    },
}

impl InputRejection {
    /// Create an InvalidCharacter rejection
    pub fn invalid_character(character: char) -> Self {
        InputRejection::InvalidCharacter { character }
    }

    /// Create a TooManyFractionalDigits rejection
    pub fn too_many_fractional_digits(actual: u32, allowed: u32) -> Self {
        InputRejection::TooManyFractionalDigits { actual, allowed }
    }
}
