//! Integration tests for payflow-core services
//!
//! Network IO is mocked at the trait level; everything from the typed
//! services down through the dispatcher, cache, and error normalization is
//! real.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::sync::Arc;

use rust_decimal::Decimal;

use payflow_core::adapters::{CollectingNotifier, MockTransport, ScriptedResponse};
use payflow_core::domain::validation::{validate_signup, SignupField};
use payflow_core::services::{AuthService, Dispatcher, FundService, TransactionService};
use payflow_core::{Credentials, FundRequest, SignupForm, SignupRequest, Tag};

// ============================================================================
// Test Helpers
// ============================================================================

struct Harness {
    transport: Arc<MockTransport>,
    notifier: Arc<CollectingNotifier>,
    dispatcher: Arc<Dispatcher>,
    auth: AuthService,
    fund: FundService,
    transactions: TransactionService,
}

fn harness() -> Harness {
    let transport = Arc::new(MockTransport::new());
    let notifier = Arc::new(CollectingNotifier::new());
    let dispatcher = Arc::new(Dispatcher::new(transport.clone(), notifier.clone()));

    Harness {
        auth: AuthService::new(Arc::clone(&dispatcher)),
        fund: FundService::new(Arc::clone(&dispatcher)),
        transactions: TransactionService::new(Arc::clone(&dispatcher)),
        transport,
        notifier,
        dispatcher,
    }
}

fn valid_signup() -> SignupRequest {
    SignupRequest {
        first_name: "Ada".to_string(),
        last_name: "Obi".to_string(),
        email: "ada@example.com".to_string(),
        phone_number: "08031234567".to_string(),
        password: "abcde".to_string(),
        confirm_password: "abcde".to_string(),
    }
}

// ============================================================================
// Notification Side-Effect Tests
// ============================================================================

/// A rejected login shows exactly one error toast with a non-empty message
#[test]
fn test_rejected_login_toasts_exactly_once() {
    let h = harness();
    h.transport.push(ScriptedResponse::status(
        401,
        serde_json::json!({"message": "invalid credentials"}),
    ));

    let outcome = h.auth.login(&Credentials::new("ada@example.com", "wrong"));

    assert!(!outcome.success);
    let errors = h.notifier.errors();
    assert_eq!(errors.len(), 1);
    assert!(!errors[0].is_empty());
    assert!(h.notifier.successes().is_empty());
}

/// A fulfilled fund-add shows exactly one success toast and no error toast
#[test]
fn test_fund_add_success_toasts_exactly_once() {
    let h = harness();
    h.transport
        .push(ScriptedResponse::ok(serde_json::json!({"status": "queued"})));

    let outcome = h.fund.add_fund(&FundRequest::new(Decimal::new(10000, 2)));

    assert!(outcome.success);
    assert_eq!(
        h.notifier.successes(),
        vec!["Funding request submitted successfully"]
    );
    assert!(h.notifier.errors().is_empty());
}

/// Transport-level failure (no response at all) still reaches the sink as a
/// displayable message, never as a panic or propagated error
#[test]
fn test_network_failure_absorbed_locally() {
    let h = harness();
    h.transport.push(ScriptedResponse::TransportFailure(
        "Unable to reach the server. Please check your connection.".to_string(),
    ));

    let outcome = h.transactions.get_balance("u-1");

    assert!(!outcome.success);
    assert_eq!(h.notifier.errors().len(), 1);
    assert!(outcome.error.unwrap().contains("Unable to reach"));
}

// ============================================================================
// Cache Tagging and Invalidation Tests
// ============================================================================

/// All three queries cache under "Users"; invalidating the tag makes each
/// eligible for refetch
#[test]
fn test_users_tag_invalidation_refetches_all_queries() {
    let h = harness();
    h.transport
        .push(ScriptedResponse::ok(serde_json::json!({"transactions": []})));
    h.transport
        .push(ScriptedResponse::ok(serde_json::json!({"id": "t-9"})));
    h.transport
        .push(ScriptedResponse::ok(serde_json::json!({"balance": "1.00"})));

    h.transactions.get_user_transactions("u-1");
    h.transactions.get_transaction("u-1", "t-9");
    h.transactions.get_balance("u-1");
    assert_eq!(h.transport.call_count(), 3);

    // Repeats are served from cache
    h.transactions.get_user_transactions("u-1");
    h.transactions.get_transaction("u-1", "t-9");
    h.transactions.get_balance("u-1");
    assert_eq!(h.transport.call_count(), 3);

    // Invalidation marks all three stale
    assert_eq!(h.dispatcher.invalidate(Tag::Users), 3);

    h.transactions.get_user_transactions("u-1");
    h.transactions.get_transaction("u-1", "t-9");
    h.transactions.get_balance("u-1");
    assert_eq!(h.transport.call_count(), 6);
}

/// Cache entries are scoped by argument: different users don't share results
#[test]
fn test_cache_scoped_by_arguments() {
    let h = harness();
    h.transport
        .push(ScriptedResponse::ok(serde_json::json!({"balance": "1.00"})));
    h.transport
        .push(ScriptedResponse::ok(serde_json::json!({"balance": "2.00"})));

    let first = h.transactions.get_balance("u-1");
    let second = h.transactions.get_balance("u-2");

    assert_eq!(first.data.unwrap().balance, Some(Decimal::new(100, 2)));
    assert_eq!(second.data.unwrap().balance, Some(Decimal::new(200, 2)));
    assert_eq!(h.transport.call_count(), 2);
}

/// Mutations don't populate the cache
#[test]
fn test_mutations_are_never_cached() {
    let h = harness();

    h.auth.login(&Credentials::new("ada@example.com", "abcde"));
    h.auth.login(&Credentials::new("ada@example.com", "abcde"));

    assert_eq!(h.transport.call_count(), 2);
    assert!(h.dispatcher.cache().is_empty());
}

// ============================================================================
// Signup Flow Tests
// ============================================================================

/// Valid form data flows through the form's handler into the signup call
#[test]
fn test_signup_form_submits_through_handler() {
    let h = harness();
    let mut form = SignupForm::new();

    let outcome = form.submit(valid_signup(), |data| h.auth.signup(&data));

    assert!(outcome.unwrap().success);
    assert_eq!(h.transport.calls()[0].path, "/api/auth/register/user");
}

/// Any single violated rule blocks submission with a per-field error
#[test]
fn test_invalid_signup_never_reaches_the_wire() {
    let h = harness();
    let mut form = SignupForm::new();

    let mut bad = valid_signup();
    bad.confirm_password = "different".to_string();

    let outcome = form.submit(bad, |data| h.auth.signup(&data));

    assert!(outcome.is_none());
    assert_eq!(h.transport.call_count(), 0);
    assert_eq!(form.field_errors().len(), 1);
    assert_eq!(form.field_errors()[0].field, SignupField::ConfirmPassword);
}

/// Documented schema boundaries: "a@b" passes the format check, passwords of
/// length 4 and 13 fail the bounds
#[test]
fn test_schema_boundaries() {
    let mut boundary = valid_signup();
    boundary.email = "a@b".to_string();
    assert!(validate_signup(&boundary).is_empty());

    let mut short = valid_signup();
    short.password = "abcd".to_string();
    short.confirm_password = "abcd".to_string();
    assert_eq!(validate_signup(&short).len(), 1);

    let mut long = valid_signup();
    long.password = "abcdefghijklm".to_string();
    long.confirm_password = "abcdefghijklm".to_string();
    assert_eq!(validate_signup(&long).len(), 1);
}

// ============================================================================
// Error Normalization Tests
// ============================================================================

/// Server payloads with different error field names all normalize to a
/// single displayable message
#[test]
fn test_error_payload_shapes_normalize() {
    for (body, expected) in [
        (serde_json::json!({"message": "a"}), "a"),
        (serde_json::json!({"error": "b"}), "b"),
        (serde_json::json!({"error": {"message": "c"}}), "c"),
    ] {
        let h = harness();
        h.transport.push(ScriptedResponse::status(400, body));

        h.auth.login(&Credentials::new("ada@example.com", "x"));
        assert_eq!(h.notifier.errors(), vec![expected.to_string()]);
    }
}

/// A failed response with no usable payload still yields a non-empty message
#[test]
fn test_empty_error_payload_gets_fallback_message() {
    let h = harness();
    h.transport
        .push(ScriptedResponse::status(502, serde_json::Value::Null));

    let outcome = h.auth.login(&Credentials::new("ada@example.com", "x"));

    assert!(!outcome.success);
    assert_eq!(h.notifier.errors(), vec!["Request failed (HTTP 502)"]);
}
