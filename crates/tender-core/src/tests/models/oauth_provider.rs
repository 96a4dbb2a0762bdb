use crate::{DocumentKind, OAuthProvider};

use std::str::FromStr;

#[test]
fn test_oauth_provider_as_str() {
    assert_eq!(OAuthProvider::Google.as_str(), "google");
    assert_eq!(OAuthProvider::Github.as_str(), "github");
    assert_eq!(OAuthProvider::Linkedin.as_str(), "linkedin");
}

#[test]
fn test_oauth_provider_from_str() {
    assert_eq!(
        OAuthProvider::from_str("GitHub").unwrap(),
        OAuthProvider::Github
    );
    assert_eq!(
        OAuthProvider::from_str("linkedin_oidc").unwrap(),
        OAuthProvider::Linkedin
    );
    assert!(OAuthProvider::from_str("myspace").is_err());
}

#[test]
fn test_document_kind_from_str() {
    assert_eq!(DocumentKind::from_str("cv").unwrap(), DocumentKind::Resume);
    assert_eq!(
        DocumentKind::from_str("transcript").unwrap(),
        DocumentKind::Transcript
    );
    assert!(DocumentKind::from_str("selfie").is_err());
}
