//! Validation lifecycle status and verdicts

use crate::types::FieldError;
use serde::{Deserialize, Serialize};

/// Lifecycle stage of one validated field
///
/// A field starts idle, enters `Validating` once the debounce window has
/// elapsed and the validator is in flight, and reaches `Succeeded` on a
/// passing verdict. A failing verdict reports into the form controller and
/// returns the field to `Idle`; there is no terminal failure state, the
/// next edit retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// No validation in progress or the last attempt failed
    Idle,

    /// The validator call for the current value is in flight
    Validating,

    /// The current value passed validation
    Succeeded,
}

/// Outcome of one validator invocation
///
/// `Pass` is a bare success; `PassWith` carries a derived product (e.g. a
/// resolved address) exposed alongside the succeeded status; `Fail` carries
/// the error descriptor forwarded to the form controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict<R> {
    /// Valid, nothing derived
    Pass,

    /// Valid, with a derived product
    PassWith(R),

    /// Invalid, with the descriptor to report for the field
    Fail(FieldError),
}
