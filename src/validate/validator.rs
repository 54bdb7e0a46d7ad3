//! Debounce and cancellation state machine around an async validator
//!
//! `DebouncedAsyncValidator` wraps a caller-supplied async validation
//! function for one form field. Edits restart a debounce timer; once input
//! settles the validator runs and its verdict is committed, unless a newer
//! edit has superseded it in the meantime.
//!
//! # Cancellation model
//!
//! Cancellation is cooperative. Every field-value change advances a
//! monotonic generation counter; the spawned validation task snapshots its
//! generation and re-checks it against the current one after every await
//! point. A superseded task's validator future still runs to completion in
//! the background (externally observable side effects such as network calls
//! are not aborted), but its verdict is discarded and it performs no state
//! mutation and no controller calls. Callers that need hard cancellation
//! implement it inside the validator itself.

use crate::form::FormController;
use crate::types::{FieldError, FieldValue};
use crate::validate::status::{ValidationStatus, Verdict};
use futures::future::BoxFuture;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Type-erased async validation function
///
/// Takes the field's current value and resolves to a [`Verdict`]. The
/// future must be `'static`: it may outlive the edit that started it and is
/// then discarded by the generation guard.
pub type ValidatorFn<R> =
    Arc<dyn Fn(FieldValue) -> BoxFuture<'static, Verdict<R>> + Send + Sync>;

/// Shared validation state, guarded by the generation counter
#[derive(Debug)]
struct ValidationState<R> {
    generation: u64,
    status: ValidationStatus,
    product: Option<R>,
}

/// Debounced, cancellable async validator for one form field
///
/// Owns the field's validation lifecycle exclusively; the only shared
/// collaborator is the form controller, touched solely through
/// `clear_errors`/`set_error` for this validator's own field name.
///
/// `on_value_change` must be called from within a Tokio runtime.
pub struct DebouncedAsyncValidator<R> {
    field_name: String,
    debounce: Duration,
    controller: Arc<dyn FormController>,
    validator: ValidatorFn<R>,
    state: Arc<Mutex<ValidationState<R>>>,
    last_value: Option<FieldValue>,
    task: Option<JoinHandle<()>>,
}

impl<R: Send + 'static> DebouncedAsyncValidator<R> {
    /// Quiet period waited after the last edit before validating
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

    /// Create a validator with the default debounce window
    pub fn new(
        field_name: impl Into<String>,
        controller: Arc<dyn FormController>,
        validator: ValidatorFn<R>,
    ) -> Self {
        Self::with_debounce(field_name, controller, validator, Self::DEFAULT_DEBOUNCE)
    }

    /// Create a validator with an explicit debounce window
    pub fn with_debounce(
        field_name: impl Into<String>,
        controller: Arc<dyn FormController>,
        validator: ValidatorFn<R>,
        debounce: Duration,
    ) -> Self {
        DebouncedAsyncValidator {
            field_name: field_name.into(),
            debounce,
            controller,
            validator,
            state: Arc::new(Mutex::new(ValidationState {
                generation: 0,
                status: ValidationStatus::Idle,
                product: None,
            })),
            last_value: None,
            task: None,
        }
    }

    /// The field this validator reports for
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Current lifecycle status
    pub fn status(&self) -> ValidationStatus {
        lock(&self.state).status
    }

    /// Current generation (advances once per field-value change)
    pub fn generation(&self) -> u64 {
        lock(&self.state).generation
    }

    /// Notify the validator that the field's value changed
    ///
    /// Starts a new generation: status and product reset immediately, the
    /// field's reported error is cleared, and any in-flight work from the
    /// previous generation is superseded. An unchanged value is a no-op; an
    /// empty value resets state but starts no validation cycle.
    pub fn on_value_change(&mut self, value: impl Into<FieldValue>) {
        let value = value.into();
        if self.last_value.as_ref() == Some(&value) {
            return;
        }
        self.last_value = Some(value.clone());

        let generation = {
            let mut state = lock(&self.state);
            state.generation += 1;
            state.status = ValidationStatus::Idle;
            state.product = None;
            state.generation
        };

        // detach the previous task; the generation guard neutralizes it
        self.task = None;

        if value.is_empty() {
            return;
        }

        self.controller.clear_errors(&self.field_name);

        let state = Arc::clone(&self.state);
        let controller = Arc::clone(&self.controller);
        let validator = Arc::clone(&self.validator);
        let field_name = self.field_name.clone();
        let debounce = self.debounce;

        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            {
                let mut current = lock(&state);
                if current.generation != generation {
                    return;
                }
                current.status = ValidationStatus::Validating;
            }

            let verdict = (validator)(value).await;

            let mut current = lock(&state);
            if current.generation != generation {
                tracing::trace!(field = %field_name, generation, "discarding stale validation result");
                return;
            }
            match verdict {
                Verdict::Pass => {
                    current.status = ValidationStatus::Succeeded;
                }
                Verdict::PassWith(product) => {
                    current.product = Some(product);
                    current.status = ValidationStatus::Succeeded;
                }
                Verdict::Fail(error) => {
                    current.status = ValidationStatus::Idle;
                    controller.set_error(&field_name, error);
                }
            }
        }));
    }
}

impl<R: Clone + Send + 'static> DebouncedAsyncValidator<R> {
    /// Derived product of the last successful validation, if any
    ///
    /// Defined only while status is `Succeeded` for the current value; any
    /// edit clears it before new async work starts.
    pub fn product(&self) -> Option<R> {
        lock(&self.state).product.clone()
    }
}

impl<R> Drop for DebouncedAsyncValidator<R> {
    fn drop(&mut self) {
        // instance teardown, not supersession: stop the current task so a
        // destroyed field can no longer reach the controller
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn lock<R>(state: &Arc<Mutex<ValidationState<R>>>) -> MutexGuard<'_, ValidationState<R>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Convenience constructor for validators whose closure is not yet boxed
///
/// Wraps a plain `Fn(FieldValue) -> impl Future` into a [`ValidatorFn`].
pub fn validator_fn<R, F, Fut>(f: F) -> ValidatorFn<R>
where
    F: Fn(FieldValue) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = Verdict<R>> + Send + 'static,
{
    Arc::new(move |value| -> BoxFuture<'static, Verdict<R>> { Box::pin(f(value)) })
}

/// Helper for validators that fail with a fixed descriptor
pub fn always_fail<R: Send + 'static>(error: FieldError) -> ValidatorFn<R> {
    validator_fn(move |_| {
        let error = error.clone();
        async move { Verdict::Fail(error) }
    })
}
