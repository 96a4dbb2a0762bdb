use crate::{ApiClient, ClientError};

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use tender_core::{
    AccessToken, AuthError, AuthEvent, AuthEventBus, AuthEventStream, AuthProvider, AuthResult,
    Credentials, OAuthProvider, Session, SignupRequest,
};

/// [`AuthProvider`] backed by the REST auth endpoints.
///
/// Tokens are stateless JWTs, so signing out drops the token locally and
/// announces `SignedOut`; there is no server call to revoke.
pub struct RestAuthProvider {
    api: Arc<ApiClient>,
    bus: AuthEventBus,
    current: RwLock<Option<Session>>,
}

impl RestAuthProvider {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            bus: AuthEventBus::new(),
            current: RwLock::new(None),
        }
    }

    /// Start from a previously persisted session; it becomes the
    /// `InitialSession` of every subscription.
    pub fn with_session(api: Arc<ApiClient>, session: Option<Session>) -> Self {
        let provider = Self::new(api);
        if let Some(session) = session {
            provider.api.set_token(Some(session.access_token.clone()));
            provider.store(Some(session));
        }
        provider
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    /// Session the provider currently holds
    pub fn session(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Finish an OAuth redirect carrying `token`: resolve its owner and
    /// announce the sign-in.
    pub async fn complete_oauth(&self, token: AccessToken) -> AuthResult<Session> {
        self.api.set_token(Some(token.clone()));

        match self.api.get_me().await {
            Ok(profile) => {
                let session = Session::new(token, profile.id, profile.email);
                self.accept(session.clone());
                Ok(session)
            }
            Err(e) => {
                self.api.set_token(self.session().map(|s| s.access_token));
                Err(e.into_auth_error())
            }
        }
    }

    /// Another component refreshed the token for the same user
    pub fn refresh_token(&self, token: AccessToken) -> AuthResult<Session> {
        let Some(mut session) = self.session() else {
            return Err(AuthError::not_authenticated());
        };
        session.access_token = token;
        self.api.set_token(Some(session.access_token.clone()));
        self.store(Some(session.clone()));
        self.bus.publish(AuthEvent::token_refreshed(session.clone()));
        Ok(session)
    }

    fn store(&self, session: Option<Session>) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = session;
    }

    fn accept(&self, session: Session) {
        self.api.set_token(Some(session.access_token.clone()));
        self.store(Some(session.clone()));
        log::info!("Signed in as {}", session.email);
        self.bus.publish(AuthEvent::signed_in(session));
    }
}

/// Sign-in and sign-up reject with 400/401 for bad or inactive accounts
#[track_caller]
fn credential_error(err: ClientError) -> AuthError {
    match err {
        ClientError::Api {
            status: 400 | 401 | 403,
            detail,
            ..
        } => AuthError::invalid_credentials(detail),
        other => other.into_auth_error(),
    }
}

#[async_trait]
impl AuthProvider for RestAuthProvider {
    async fn sign_up(&self, request: &SignupRequest) -> AuthResult<Session> {
        let response = self.api.signup(request).await.map_err(|e| match e {
            // Duplicate email is a form error, not a credential one
            ClientError::Api {
                status: 400,
                detail,
                ..
            } => AuthError::validation(detail, Some(String::from("email"))),
            other => credential_error(other),
        })?;
        let session = response.into_session();
        self.accept(session.clone());
        Ok(session)
    }

    async fn sign_in_with_password(&self, credentials: &Credentials) -> AuthResult<Session> {
        let response = self
            .api
            .login(credentials)
            .await
            .map_err(credential_error)?;
        let session = response.into_session();
        self.accept(session.clone());
        Ok(session)
    }

    async fn sign_in_with_oauth(
        &self,
        provider: OAuthProvider,
        redirect_to: &str,
    ) -> AuthResult<String> {
        self.api
            .oauth_authorize_url(provider, redirect_to)
            .map_err(ClientError::into_auth_error)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        let had_session = self.session().is_some();
        self.api.set_token(None);
        self.store(None);
        if had_session {
            log::info!("Signed out");
        }
        self.bus.publish(AuthEvent::signed_out());
        Ok(())
    }

    fn subscribe(&self) -> AuthEventStream {
        self.bus
            .subscribe_with_initial(AuthEvent::initial(self.session()))
    }
}
