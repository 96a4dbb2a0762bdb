use crate::{AuthError, CoreError};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_network_error_when_status_then_zero() {
    let err = AuthError::network("/users/me", "connection refused");

    assert_that!(err.status(), some(eq(0u16)));
    assert_eq!(err.error_code(), "NETWORK_ERROR");
}

#[test]
fn given_provider_error_when_status_then_http_status() {
    let err = AuthError::provider("Internal Server Error", Some(503));

    assert_that!(err.status(), some(eq(503u16)));
}

#[test]
fn given_aborted_error_when_checked_then_is_aborted() {
    assert!(AuthError::aborted().is_aborted());
    assert!(!AuthError::invalid_credentials("bad").is_aborted());
    assert_that!(AuthError::aborted().status(), none());
}

#[test]
fn given_core_validation_error_when_converted_then_field_preserved() {
    let core = CoreError::validation("bio", "bio too long");

    let err = AuthError::from(core);

    match err {
        AuthError::Validation { message, field, .. } => {
            assert_eq!(message, "bio too long");
            assert_eq!(field.as_deref(), Some("bio"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_invalid_credentials_when_user_message_then_no_location() {
    let err = AuthError::invalid_credentials("Incorrect email or password");

    assert_eq!(err.user_message(), "Incorrect email or password");
    assert!(err.to_string().starts_with("Invalid credentials"));
}
