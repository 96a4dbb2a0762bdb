use crate::{AuthEventStream, AuthResult, Credentials, OAuthProvider, Session, SignupRequest};

use async_trait::async_trait;

/// Remote identity provider the client delegates authentication to.
///
/// Session changes are also pushed through [`AuthProvider::subscribe`]; the
/// first event on every subscription is `InitialSession`.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_up(&self, request: &SignupRequest) -> AuthResult<Session>;

    async fn sign_in_with_password(&self, credentials: &Credentials) -> AuthResult<Session>;

    /// Start an OAuth flow. Returns the authorization URL to open; the
    /// resulting session arrives later as a `SignedIn` event.
    async fn sign_in_with_oauth(
        &self,
        provider: OAuthProvider,
        redirect_to: &str,
    ) -> AuthResult<String>;

    /// Revoke the remote session
    async fn sign_out(&self) -> AuthResult<()>;

    fn subscribe(&self) -> AuthEventStream;
}
