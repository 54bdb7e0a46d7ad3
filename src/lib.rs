//! Wallet Form Engine Library
//! # Overview
//!
//! This library provides the reactive-input core of a cryptocurrency
//! wallet's transaction-entry forms: a dual-unit amount converter and a
//! debounced asynchronous field validator.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TokenInfo, FieldValue, FieldError, etc.)
//! - [`format`] - Locale-aware numeric formatting, parsing, and validation
//! - [`rate`] - Exchange-rate lookup with safe identity fallback
//! - [`form`] - Form-state controller seam (`clear_errors`/`set_error`)
//! - [`convert`] - Dual-unit amount conversion:
//!   - [`convert::amount_pair`] - Synchronized token/fiat pair state
//!   - [`convert::converter`] - Keystroke handling and cross-value computation
//! - [`validate`] - Debounced async validation:
//!   - [`validate::validator`] - Debounce/generation cancellation machinery
//!
//! # Amount Entry
//!
//! An amount is represented twice, in the token's native unit and in fiat;
//! the side the user last typed into is authoritative and the other side is
//! computed through the current exchange rate. Arithmetic runs on
//! arbitrary-precision decimals with half-even display rounding; malformed
//! keystrokes are silently dropped (masked input).
//!
//! # Async Validation
//!
//! Each validated field defers its caller-supplied async validator until
//! input settles, then reports the outcome: success (optionally with a
//! derived product) or a field error forwarded to the form controller.
//! Stale results from superseded edits are discarded by a generation guard;
//! in-flight validator calls are never forcibly aborted.

// Module declarations
pub mod convert;
pub mod form;
pub mod format;
pub mod rate;
pub mod types;
pub mod validate;

pub use convert::{ActiveEntry, AmountPair, DualUnitAmountConverter};
pub use form::{BasicFormController, FormController};
pub use format::{AmountFormatter, LocaleFormat};
pub use rate::{effective_rate, FixedRateProvider, RateProvider};
pub use types::{FieldError, FieldValue, InputRejection, TokenInfo, Unit, FIAT_DECIMALS};
pub use validate::{
    always_fail, validator_fn, DebouncedAsyncValidator, ValidationStatus, ValidatorFn, Verdict,
};
