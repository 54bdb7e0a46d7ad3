//! Form-state controller seam
//!
//! Async validators never own the form's error state; they report into a
//! controller that does. The `FormController` trait captures the two
//! operations the validator needs (`clear_errors`, `set_error`), both
//! synchronous and idempotent. `BasicFormController` is an in-memory
//! implementation so the crate is usable and testable without an external
//! form library.

use crate::types::FieldError;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// External form-state controller
///
/// Both operations are synchronous, idempotent, and safe to call
/// redundantly: clearing a field with no error and overwriting an existing
/// error are no-ops and replacements respectively. Validators only ever
/// touch their own field's error slot, which keeps cross-field interactions
/// out by construction.
pub trait FormController: Send + Sync {
    /// Remove any reported error for the field
    fn clear_errors(&self, field_name: &str);

    /// Report an error for the field, replacing any existing one
    fn set_error(&self, field_name: &str, error: FieldError);
}

/// In-memory form-state controller
///
/// Keeps one error slot per field name behind a mutex so it can be shared
/// across validator tasks.
#[derive(Debug, Default)]
pub struct BasicFormController {
    errors: Mutex<HashMap<String, FieldError>>,
}

impl BasicFormController {
    /// Create a controller with no reported errors
    pub fn new() -> Self {
        BasicFormController::default()
    }

    /// Currently reported error for a field, if any
    pub fn error(&self, field_name: &str) -> Option<FieldError> {
        self.errors().get(field_name).cloned()
    }

    /// Whether any field currently has a reported error
    pub fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn errors(&self) -> MutexGuard<'_, HashMap<String, FieldError>> {
        self.errors.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FormController for BasicFormController {
    fn clear_errors(&self, field_name: &str) {
        self.errors().remove(field_name);
    }

    fn set_error(&self, field_name: &str, error: FieldError) {
        self.errors().insert(field_name.to_string(), error);
    }
}
