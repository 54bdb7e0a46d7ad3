//! End-to-end integration tests
//!
//! These tests exercise the two reactive-input components the way a form
//! row uses them:
//! 1. Drive the dual-unit converter with keystroke sequences and assert the
//!    resulting pair state
//! 2. Drive the debounced validator with edit bursts on a paused Tokio
//!    clock and assert the lifecycle, the controller interactions, and the
//!    derived product
//!
//! The async tests use a recording controller so that every
//! `clear_errors`/`set_error` call is observable, including calls that must
//! NOT happen (stale-result suppression).

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex, PoisonError};
    use std::time::Duration;
    use tokio::sync::Notify;
    use wallet_form_engine::{
        always_fail, validator_fn, DebouncedAsyncValidator, DualUnitAmountConverter, FieldError,
        FieldValue, FormController, TokenInfo, Unit, ValidationStatus, ValidatorFn, Verdict,
    };

    /// Controller call recorded by [`RecordingController`]
    #[derive(Debug, Clone, PartialEq)]
    enum ControllerCall {
        Cleared(String),
        Set(String, FieldError),
    }

    /// Form controller that records every call for later assertion
    #[derive(Debug, Default)]
    struct RecordingController {
        calls: Mutex<Vec<ControllerCall>>,
    }

    impl RecordingController {
        fn new() -> Arc<Self> {
            Arc::new(RecordingController::default())
        }

        fn calls(&self) -> Vec<ControllerCall> {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    impl FormController for RecordingController {
        fn clear_errors(&self, field_name: &str) {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(ControllerCall::Cleared(field_name.to_string()));
        }

        fn set_error(&self, field_name: &str, error: FieldError) {
            self.calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(ControllerCall::Set(field_name.to_string(), error));
        }
    }

    fn ton_converter(rate: i64) -> DualUnitAmountConverter {
        DualUnitAmountConverter::new(TokenInfo::new("TON", 9), Some(Decimal::new(rate, 0)))
    }

    // ---- Dual-unit converter ----

    #[test]
    fn test_reconversion_round_trip_has_no_drift() {
        let mut converter = ton_converter(3);

        converter.on_input(Unit::Token, "10");
        let fiat = converter.state().fiat_value().to_string();
        assert_eq!(fiat, "30.00");

        converter.on_focus(Unit::Fiat);
        converter.on_input(Unit::Fiat, &fiat);
        let token = converter.state().token_value().to_string();

        converter.on_focus(Unit::Token);
        converter.on_input(Unit::Token, &token);

        // token -> fiat -> token returns the starting amount within the cap
        assert_eq!(converter.state().token_value(), "10");
        assert_eq!(converter.state().fiat_value(), "30.00");
    }

    #[rstest]
    #[case::nine_digits_accepted("1.123456789", true)]
    #[case::ten_digits_rejected("1.1234567891", false)]
    fn test_precision_cap_enforcement(#[case] input: &str, #[case] accepted: bool) {
        let mut converter = ton_converter(3);
        converter.on_input(Unit::Token, "5");
        let before = converter.state().clone();

        converter.on_input(Unit::Token, input);

        if accepted {
            assert_eq!(converter.state().token_value(), input);
        } else {
            assert_eq!(converter.state(), &before);
        }
    }

    #[test]
    fn test_empty_input_clears_both_sides() {
        let mut converter = ton_converter(3);
        converter.on_input(Unit::Token, "12.5");
        assert!(!converter.state().is_empty());

        converter.on_input(Unit::Token, "");

        assert_eq!(converter.state().token_value(), "");
        assert_eq!(converter.state().fiat_value(), "");
        assert_eq!(converter.state().raw_input(), "");
    }

    #[test]
    fn test_active_unit_authority() {
        let mut converter = ton_converter(3);

        converter.on_input(Unit::Token, "10");
        assert_eq!(converter.state().fiat_value(), "30.00");

        converter.on_focus(Unit::Fiat);
        converter.on_input(Unit::Fiat, "30");
        assert_eq!(converter.state().token_value(), "10");
    }

    #[test]
    fn test_focus_and_blur_lifecycle() {
        let mut converter = ton_converter(3);

        converter.on_focus(Unit::Token);
        converter.on_input(Unit::Token, "7");
        assert_eq!(converter.state().fiat_value(), "21.00");

        // moving focus to the sibling field suppresses the blur
        assert!(!converter.on_blur(Some(Unit::Fiat)));
        converter.on_focus(Unit::Fiat);
        assert_eq!(converter.state().raw_input(), "21.00");
        assert!(!converter.is_touched());

        // leaving the pair commits the blur
        assert!(converter.on_blur(None));
        assert!(converter.is_touched());

        // the re-seed did not trigger a reconversion
        assert_eq!(converter.state().token_value(), "7");
        assert_eq!(converter.state().fiat_value(), "21.00");
    }

    // ---- Debounced async validator ----

    #[tokio::test(start_paused = true)]
    async fn test_debounce_coalesces_edit_burst() {
        let ctrl = RecordingController::new();
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_in_validator = Arc::clone(&seen);
        let vfn: ValidatorFn<u32> = validator_fn(move |value: FieldValue| {
            seen_in_validator
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(value.to_string());
            async { Verdict::Pass }
        });
        let mut validator = DebouncedAsyncValidator::new("address", ctrl.clone(), vfn);

        validator.on_value_change("a");
        tokio::time::sleep(Duration::from_millis(100)).await;
        validator.on_value_change("ab");
        tokio::time::sleep(Duration::from_millis(100)).await;
        validator.on_value_change("abc");
        tokio::time::sleep(Duration::from_millis(600)).await;

        // exactly one validator invocation, for the final value
        let seen = seen.lock().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(seen.as_slice(), ["abc"]);
        assert_eq!(validator.status(), ValidationStatus::Succeeded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_result_is_fully_suppressed() {
        let ctrl = RecordingController::new();
        let gate = Arc::new(Notify::new());
        let gate_in_validator = Arc::clone(&gate);
        let vfn: ValidatorFn<u32> = validator_fn(move |value: FieldValue| {
            let gate = Arc::clone(&gate_in_validator);
            async move {
                if value.to_string() == "v1" {
                    // stall until the test releases this call, then fail
                    gate.notified().await;
                    Verdict::Fail(FieldError::new("stale-error"))
                } else {
                    Verdict::Pass
                }
            }
        });
        let mut validator = DebouncedAsyncValidator::new("address", ctrl.clone(), vfn);

        validator.on_value_change("v1");
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(validator.status(), ValidationStatus::Validating);

        // supersede v1 while its validator call is in flight
        validator.on_value_change("v2");
        gate.notify_waiters();
        tokio::time::sleep(Duration::from_millis(600)).await;

        // v1's failure was discarded: no Set call, and v2's success stands
        assert_eq!(validator.status(), ValidationStatus::Succeeded);
        assert_eq!(
            ctrl.calls(),
            vec![
                ControllerCall::Cleared("address".to_string()),
                ControllerCall::Cleared("address".to_string()),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_without_and_with_product() {
        let ctrl = RecordingController::new();

        let pass: ValidatorFn<u32> = validator_fn(|_| async { Verdict::Pass });
        let mut bare = DebouncedAsyncValidator::new("bare", ctrl.clone(), pass);
        bare.on_value_change("value");
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(bare.status(), ValidationStatus::Succeeded);
        assert_eq!(bare.product(), None);

        let pass_with: ValidatorFn<u32> = validator_fn(|_| async { Verdict::PassWith(42) });
        let mut with_product = DebouncedAsyncValidator::new("with", ctrl.clone(), pass_with);
        with_product.on_value_change("value");
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(with_product.status(), ValidationStatus::Succeeded);
        assert_eq!(with_product.product(), Some(42));
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_path_reports_once_and_returns_to_idle() {
        let ctrl = RecordingController::new();
        let error = FieldError::with_message("invalid-address", "checksum mismatch");
        let mut validator: DebouncedAsyncValidator<u32> =
            DebouncedAsyncValidator::new("address", ctrl.clone(), always_fail(error.clone()));

        validator.on_value_change("bad-address");
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(validator.status(), ValidationStatus::Idle);
        assert_eq!(
            ctrl.calls(),
            vec![
                ControllerCall::Cleared("address".to_string()),
                ControllerCall::Set("address".to_string(), error),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_value_triggers_no_controller_calls() {
        let ctrl = RecordingController::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_validator = Arc::clone(&calls);
        let vfn: ValidatorFn<u32> = validator_fn(move |_| {
            calls_in_validator.fetch_add(1, Ordering::SeqCst);
            async { Verdict::Pass }
        });
        let mut validator = DebouncedAsyncValidator::new("address", ctrl.clone(), vfn);

        validator.on_value_change("");
        validator.on_value_change(FieldValue::Number(Decimal::ZERO));
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(validator.status(), ValidationStatus::Idle);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(ctrl.calls().is_empty());
    }

    // ---- Converter and validator composed as one form row ----

    #[tokio::test(start_paused = true)]
    async fn test_form_row_amount_and_recipient() {
        let ctrl = RecordingController::new();

        // amount column: token/fiat pair at a 2.00 rate
        let mut amount = ton_converter(2);
        amount.on_focus(Unit::Token);
        amount.on_input(Unit::Token, "1.5");
        assert_eq!(amount.state().fiat_value(), "3.00");

        // recipient column: async address check producing a resolved id
        let resolve: ValidatorFn<String> = validator_fn(|value: FieldValue| {
            let resolved = format!("resolved:{}", value);
            async move { Verdict::PassWith(resolved) }
        });
        let mut recipient = DebouncedAsyncValidator::new("recipient", ctrl.clone(), resolve);
        recipient.on_value_change("wallet.ton");
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(recipient.status(), ValidationStatus::Succeeded);
        assert_eq!(
            recipient.product(),
            Some("resolved:wallet.ton".to_string())
        );

        // the row commits once both columns have settled
        assert!(amount.on_blur(None));
        assert!(amount.is_touched());
        assert!(!amount.state().is_empty());
    }
}
