//! Debounced asynchronous field validation
//!
//! This module contains the validation side of the form engine:
//! - `status` - Lifecycle status and validator verdict types
//! - `validator` - The debounce/cancellation state machine around a
//!   caller-supplied async validation function

pub mod status;
pub mod validator;

pub use status::{ValidationStatus, Verdict};
pub use validator::{always_fail, validator_fn, DebouncedAsyncValidator, ValidatorFn};
