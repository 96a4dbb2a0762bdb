//! Integration tests for the API client using wiremock mock server

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tender_client::{ApiClient, ClientError};
use tender_core::{
    AccessToken, Credentials, DocumentKind, ProfileUpdate, SignupRequest, UploadFile,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string_contains, header, method, path},
};

fn profile_json(id: i64, email: &str) -> serde_json::Value {
    json!({
        "id": id,
        "email": email,
        "name": "Ada Lovelace",
        "skills": ["rust", "sql"],
        "is_active": true,
        "profile_completion_percentage": 40
    })
}

#[tokio::test]
async fn test_login_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/json"))
        .and(body_json(json!({"email": "ada@example.com", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1",
            "token_type": "bearer",
            "user": {"id": 7, "email": "ada@example.com", "name": "Ada", "is_active": true}
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let response = client
        .login(&Credentials::new("ada@example.com", "hunter2"))
        .await
        .unwrap();

    assert_eq!(response.access_token.expose(), "tok-1");
    assert_eq!(response.user.id.as_str(), "7");

    let session = response.into_session();
    assert_eq!(session.email, "ada@example.com");
    assert_eq!(session.token_type, "bearer");
}

#[tokio::test]
async fn test_login_rejected_reports_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/json"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Incorrect email or password"})),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let err = client
        .login(&Credentials::new("ada@example.com", "wrong"))
        .await
        .unwrap_err();

    match err {
        ClientError::Api {
            status,
            endpoint,
            detail,
            ..
        } => {
            assert_eq!(status, 401);
            assert_eq!(endpoint, "POST /auth/login/json");
            assert_eq!(detail, "Incorrect email or password");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_signup_posts_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .and(body_string_contains("\"name\":\"Ada\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-new",
            "user": {"id": "u-1", "email": "ada@example.com"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let response = client
        .signup(&SignupRequest::new("ada@example.com", "pw", "Ada"))
        .await
        .unwrap();

    assert_eq!(response.token_type, "bearer");
    assert!(response.user.is_active);
}

#[tokio::test]
async fn test_get_me_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(7, "ada@example.com")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    client.set_token(Some(AccessToken::new("tok-1")));

    let profile = client.get_me().await.unwrap();

    assert_eq!(profile.id.as_str(), "7");
    assert_eq!(profile.skills, vec!["rust".to_string(), "sql".to_string()]);
    assert_eq!(profile.profile_completion_percentage, 40);
}

#[tokio::test]
async fn test_update_me_sends_only_present_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/me"))
        .and(body_json(json!({"headline": "Engineer"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(7, "ada@example.com")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    client.set_token(Some(AccessToken::new("tok-1")));

    let update = ProfileUpdate {
        headline: Some("Engineer".to_string()),
        ..Default::default()
    };
    let result = client.update_me(&update).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_upload_document_multipart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/resume"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"cv.pdf\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "filename": "cv.pdf",
            "message": "Resume uploaded successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    client.set_token(Some(AccessToken::new("tok-1")));

    let file = UploadFile::new(
        "cv.pdf",
        Some("application/pdf".to_string()),
        b"%PDF-1.4 test".to_vec(),
    );
    let receipt = client
        .upload_document(DocumentKind::Resume, &file)
        .await
        .unwrap();

    assert_eq!(receipt.filename, "cv.pdf");
    assert_eq!(receipt.message, "Resume uploaded successfully");
}

#[tokio::test]
async fn test_upload_with_bad_content_type_is_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/files/transcript"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    client.set_token(Some(AccessToken::new("tok-1")));

    let file = UploadFile::new(
        "grades.pdf",
        Some("not a content type".to_string()),
        b"%PDF-1.4 test".to_vec(),
    );
    let err = client
        .upload_document(DocumentKind::Transcript, &file)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidRequest { .. }));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_network_failure_reports_status_zero() {
    // Nothing listens on port 1
    let client = ApiClient::new("http://127.0.0.1:1");

    let err = client.get_me().await.unwrap_err();

    assert!(matches!(err, ClientError::Network { .. }));
    assert_eq!(err.status(), Some(0));
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(&mock_server.uri());
    let err = client.get_me().await.unwrap_err();

    assert!(matches!(err, ClientError::Json { .. }));
}

#[tokio::test]
async fn test_token_change_aborts_in_flight_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(profile_json(7, "ada@example.com"))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock_server)
        .await;

    let client = Arc::new(ApiClient::new(&mock_server.uri()));
    client.set_token(Some(AccessToken::new("tok-a")));

    let in_flight = {
        let client = Arc::clone(&client);
        tokio::spawn(async move { client.get_me().await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    client.set_token(Some(AccessToken::new("tok-b")));

    let err = in_flight.await.unwrap().unwrap_err();
    assert!(err.is_aborted());
}

#[tokio::test]
async fn test_unauthenticated_request_is_never_aborted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "access_token": "tok-1",
                    "user": {"id": 1, "email": "a@b.co"}
                }))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&mock_server)
        .await;

    let client = Arc::new(ApiClient::new(&mock_server.uri()));

    let in_flight = {
        let client = Arc::clone(&client);
        tokio::spawn(async move { client.login(&Credentials::new("a@b.co", "pw")).await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    client.set_token(Some(AccessToken::new("other")));

    assert!(in_flight.await.unwrap().is_ok());
}
