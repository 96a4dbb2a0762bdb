use crate::{Credentials, SignupRequest};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn test_credentials_email_trimmed() {
    let credentials = Credentials::new("  a@x.com ", "pw");
    assert_eq!(credentials.email, "a@x.com");
}

#[test]
fn test_credentials_valid() {
    assert_that!(Credentials::new("a@x.com", "pw").validate(), ok(anything()));
}

#[test]
fn test_credentials_reject_bad_email() {
    assert_that!(Credentials::new("not-an-email", "pw").validate(), err(anything()));
    assert_that!(Credentials::new("@x.com", "pw").validate(), err(anything()));
    assert_that!(Credentials::new("a@localhost", "pw").validate(), err(anything()));
}

#[test]
fn test_credentials_reject_empty_password() {
    let result = Credentials::new("a@x.com", "").validate();
    assert_eq!(result.unwrap_err().field(), Some("password"));
}

#[test]
fn test_credentials_debug_hides_password() {
    let debug = format!("{:?}", Credentials::new("a@x.com", "hunter2"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn test_signup_requires_name() {
    let result = SignupRequest::new("a@x.com", "pw", "  ").validate();
    assert_eq!(result.unwrap_err().field(), Some("name"));
}

#[test]
fn test_signup_valid() {
    assert_that!(
        SignupRequest::new("a@x.com", "pw", "Ada Lovelace").validate(),
        ok(anything())
    );
}
