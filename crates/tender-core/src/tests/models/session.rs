use crate::{AccessToken, AuthEvent, AuthEventKind, Session, UserId};

#[test]
fn test_access_token_debug_is_redacted() {
    let session = Session::new(
        AccessToken::new("secret-token"),
        UserId::from("u-1"),
        "a@x.com".to_string(),
    );

    let debug = format!("{:?}", session);

    assert!(!debug.contains("secret-token"));
    assert_eq!(session.access_token.expose(), "secret-token");
    assert_eq!(session.token_type, "bearer");
}

#[test]
fn test_same_user_ignores_token() {
    let a = Session::new(AccessToken::new("t1"), UserId::from("u-1"), "a@x.com".into());
    let b = Session::new(AccessToken::new("t2"), UserId::from("u-1"), "a@x.com".into());
    let c = Session::new(AccessToken::new("t1"), UserId::from("u-2"), "b@x.com".into());

    assert!(a.same_user(&b));
    assert!(!a.same_user(&c));
}

#[test]
fn test_auth_event_constructors() {
    assert_eq!(AuthEvent::signed_out().kind, AuthEventKind::SignedOut);
    assert!(AuthEvent::signed_out().session.is_none());
    assert_eq!(AuthEvent::initial(None).kind.as_str(), "INITIAL_SESSION");
}
