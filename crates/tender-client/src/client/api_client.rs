use crate::client::{AuthResponse, ClientError, ClientResult};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tender_core::{
    AccessToken, Credentials, DocumentKind, OAuthProvider, Profile, ProfileUpdate, SignupRequest,
    UploadFile, UploadReceipt,
};

const DEFAULT_UPLOAD_MIME: &str = "application/octet-stream";

/// HTTP client for the Tender REST API
///
/// Holds the bearer token for the current session. Every token change bumps
/// an auth epoch; a response to a request issued under an older epoch is
/// reported as [`ClientError::Aborted`] instead of being handed back.
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
    token: RwLock<Option<AccessToken>>,
    auth_epoch: AtomicU64,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:8000")
    pub fn new(base_url: &str) -> Self {
        Self::from_reqwest(base_url, ReqwestClient::new())
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::network(base_url, e))?;
        Ok(Self::from_reqwest(base_url, client))
    }

    fn from_reqwest(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: RwLock::new(None),
            auth_epoch: AtomicU64::new(0),
        }
    }

    /// Replace the bearer token; in-flight authenticated requests become stale
    pub fn set_token(&self, token: Option<AccessToken>) {
        let mut guard = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *guard = token;
        self.auth_epoch.fetch_add(1, Ordering::SeqCst);
    }

    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn current_epoch(&self) -> u64 {
        self.auth_epoch.load(Ordering::SeqCst)
    }

    /// Build a request with the bearer header when a token is held.
    /// Returns the epoch the request was issued under.
    fn request(&self, method: Method, path: &str) -> (RequestBuilder, Option<u64>) {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        let guard = self.token.read().unwrap_or_else(PoisonError::into_inner);
        let epoch = match guard.as_ref() {
            Some(token) => {
                req = req.bearer_auth(token.expose());
                Some(self.current_epoch())
            }
            None => None,
        };

        (req, epoch)
    }

    /// Execute request and handle errors
    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        req: RequestBuilder,
        epoch: Option<u64>,
    ) -> ClientResult<T> {
        log::debug!("-> {}", endpoint);

        let response = req
            .send()
            .await
            .map_err(|e| ClientError::network(endpoint, e))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::network(endpoint, e))?;

        if epoch.is_some_and(|issued| issued != self.current_epoch()) {
            log::debug!("Discarding response from {}: token changed", endpoint);
            return Err(ClientError::aborted(endpoint));
        }

        if !status.is_success() {
            log::debug!("<- {} {}", endpoint, status.as_u16());
            return Err(ClientError::api(status.as_u16(), endpoint, &body));
        }

        serde_json::from_slice(&body).map_err(|e| ClientError::json(endpoint, e))
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Create an account
    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<AuthResponse> {
        let endpoint = "POST /auth/signup";
        let (req, epoch) = self.request(Method::POST, "/auth/signup");
        self.execute(endpoint, req.json(request), epoch).await
    }

    /// Password sign-in
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<AuthResponse> {
        let endpoint = "POST /auth/login/json";
        let (req, epoch) = self.request(Method::POST, "/auth/login/json");
        self.execute(endpoint, req.json(credentials), epoch).await
    }

    /// URL the user opens to authorize with `provider`
    pub fn oauth_authorize_url(
        &self,
        provider: OAuthProvider,
        redirect_to: &str,
    ) -> ClientResult<String> {
        let base = format!(
            "{}/auth/oauth/{}/authorize",
            self.base_url,
            provider.as_str()
        );
        let url = Url::parse_with_params(&base, &[("redirect_to", redirect_to)])
            .map_err(|e| ClientError::invalid_request(format!("Bad OAuth URL {}: {}", base, e)))?;
        Ok(url.to_string())
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Profile of the token's owner
    pub async fn get_me(&self) -> ClientResult<Profile> {
        let endpoint = "GET /users/me";
        let (req, epoch) = self.request(Method::GET, "/users/me");
        self.execute(endpoint, req, epoch).await
    }

    /// Apply a partial update to the token owner's profile
    pub async fn update_me(&self, update: &ProfileUpdate) -> ClientResult<Profile> {
        let endpoint = "PUT /users/me";
        let (req, epoch) = self.request(Method::PUT, "/users/me");
        self.execute(endpoint, req.json(update), epoch).await
    }

    // =========================================================================
    // Files
    // =========================================================================

    /// Upload a document as multipart field `file`
    pub async fn upload_document(
        &self,
        kind: DocumentKind,
        file: &UploadFile,
    ) -> ClientResult<UploadReceipt> {
        let path = format!("/files/{}", kind.as_str());
        let endpoint = format!("POST {}", path);

        let mime = file.mime_type.as_deref().unwrap_or(DEFAULT_UPLOAD_MIME);
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(mime)
            .map_err(|e| {
                ClientError::invalid_request(format!("Bad content type {:?}: {}", mime, e))
            })?;
        let form = Form::new().part("file", part);

        let (req, epoch) = self.request(Method::POST, &path);
        self.execute(&endpoint, req.multipart(form), epoch).await
    }
}
