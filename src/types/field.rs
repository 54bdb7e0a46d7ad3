//! Field values and error descriptors for validated form fields
//!
//! This module defines the value type carried by a validated field (text or
//! numeric) and the error descriptor that an asynchronous validator reports
//! into the form-state controller when a value fails validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current contents of a validated form field
///
/// Fields carry either free text (addresses, comments) or a numeric value
/// (amounts). An empty field triggers no validation cycle at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text contents, e.g. a recipient address
    Text(String),

    /// Numeric contents, e.g. an amount
    Number(Decimal),
}

impl FieldValue {
    /// Whether this value counts as empty for validation purposes
    ///
    /// An empty string and a numeric zero are both empty: neither starts a
    /// validation cycle, mirroring the truthiness check of the form layer
    /// this crate integrates with.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Number(value) => value.is_zero(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Number(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::Number(value) => write!(f, "{}", value),
        }
    }
}

/// Error descriptor reported into the form-state controller
///
/// Mirrors the shape the surrounding form layer expects: a machine-readable
/// kind plus an optional human-readable message. Reported via
/// [`FormController::set_error`](crate::form::FormController::set_error) and
/// cleared on the next edit of the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Machine-readable error kind, e.g. "invalid-address"
    pub kind: String,

    /// Optional human-readable message for display next to the field
    pub message: Option<String>,
}

impl FieldError {
    /// Create an error descriptor with no message
    pub fn new(kind: impl Into<String>) -> Self {
        FieldError {
            kind: kind.into(),
            message: None,
        }
    }

    /// Create an error descriptor with a display message
    pub fn with_message(kind: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            kind: kind.into(),
            message: Some(message.into()),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.kind, message),
            None => write!(f, "{}", self.kind),
        }
    }
}
