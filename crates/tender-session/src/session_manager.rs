use crate::{
    DiagnosticCategory, DiagnosticLevel, Diagnostics, FetchOutcome, FetchToken, LastError,
    ProfileFetcher, SessionRuntime, SessionSnapshot, SessionState,
};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tender_config::SessionConfig;
use tender_core::{
    AccessToken, AuthError, AuthEvent, AuthEventKind, AuthProvider, AuthResult, Credentials,
    OAuthProvider, Profile, ProfileStore, ProfileUpdate, Session, SignupRequest, UserId,
};
use tokio::sync::{mpsc, watch};

/// Sent by whoever commits a new user so the sync task loads their profile.
/// The token is issued at commit time, so commit order decides which fetch
/// is current regardless of how the fetch tasks are scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionChanged {
    pub token: FetchToken,
}

/// Handle to the client's single authenticated session.
///
/// Cheap to clone; clones share state. Consumers read through
/// [`SessionManager::snapshot`] or [`SessionManager::subscribe`] and change
/// state only through the action methods.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<Inner>,
}

struct Inner {
    provider: Arc<dyn AuthProvider>,
    fetcher: ProfileFetcher,
    diagnostics: Diagnostics,
    state: watch::Sender<SessionSnapshot>,
    changes: Mutex<Option<mpsc::UnboundedSender<SessionChanged>>>,
    /// Token of the last session ended by `logout`; late events carrying it
    /// must not revive the session
    ended: Mutex<Option<AccessToken>>,
    /// First provider event (or the watchdog) has settled startup
    resolved: AtomicBool,
    watchdog: Duration,
}

impl SessionManager {
    pub fn new(provider: Arc<dyn AuthProvider>, store: Arc<dyn ProfileStore>) -> Self {
        Self::with_config(
            provider,
            store,
            &SessionConfig::default(),
            Diagnostics::default(),
        )
    }

    pub fn with_config(
        provider: Arc<dyn AuthProvider>,
        store: Arc<dyn ProfileStore>,
        config: &SessionConfig,
        diagnostics: Diagnostics,
    ) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::default());
        Self {
            inner: Arc::new(Inner {
                provider,
                fetcher: ProfileFetcher::new(store),
                diagnostics,
                state,
                changes: Mutex::new(None),
                ended: Mutex::new(None),
                resolved: AtomicBool::new(false),
                watchdog: config.watchdog(),
            }),
        }
    }

    /// Subscribe to the provider and spawn the reconcile, profile sync and
    /// watchdog tasks. They run until the returned guard is dropped.
    pub fn start(&self) -> SessionRuntime {
        let events = self.inner.provider.subscribe();
        let (tx, rx) = mpsc::unbounded_channel();
        *self
            .inner
            .changes
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(tx);

        self.inner.resolved.store(false, Ordering::SeqCst);
        self.inner.state.send_if_modified(|snap| {
            let modified = !snap.loading;
            snap.loading = true;
            modified
        });

        log::debug!(
            "Session runtime starting, watchdog {}ms",
            self.inner.watchdog.as_millis()
        );
        SessionRuntime::spawn(self.clone(), events, rx, self.inner.watchdog)
    }

    // =========================================================================
    // Observation
    // =========================================================================

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.state.subscribe()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.inner.diagnostics
    }

    pub fn current_user(&self) -> Option<UserId> {
        self.inner.state.borrow().state.user_id().cloned()
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Password sign-in. The profile loads afterwards in the sync task.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Session> {
        let credentials = Credentials::new(email, password);
        if let Err(e) = credentials.validate() {
            return Err(self.surface("login", AuthError::from(e)));
        }

        let previous = self.begin_sign_in();
        let result = self
            .inner
            .provider
            .sign_in_with_password(&credentials)
            .await;
        self.finish_sign_in("login", previous, result)
    }

    pub async fn signup(&self, email: &str, password: &str, name: &str) -> AuthResult<Session> {
        let request = SignupRequest::new(email, password, name);
        if let Err(e) = request.validate() {
            return Err(self.surface("signup", AuthError::from(e)));
        }

        let previous = self.begin_sign_in();
        let result = self.inner.provider.sign_up(&request).await;
        self.finish_sign_in("signup", previous, result)
    }

    /// Start an OAuth flow and return the URL to open. The session arrives
    /// later as a provider event.
    pub async fn sign_in_with_oauth(
        &self,
        provider: OAuthProvider,
        redirect_to: &str,
    ) -> AuthResult<String> {
        let previous = self.begin_sign_in();
        match self
            .inner
            .provider
            .sign_in_with_oauth(provider, redirect_to)
            .await
        {
            Ok(url) => {
                log::info!("OAuth sign-in started with {}", provider.as_str());
                self.inner.state.send_if_modified(|snap| {
                    let modified = snap.loading;
                    snap.loading = false;
                    modified
                });
                Ok(url)
            }
            Err(err) => Err(self.fail_sign_in("sign_in_with_oauth", previous, err)),
        }
    }

    /// Clear the session and profile when called, then revoke remotely in
    /// the returned future. A failed revoke is logged and recorded, never
    /// rolled back.
    pub fn logout(&self) -> impl Future<Output = ()> + Send + 'static {
        self.end_session();
        let manager = self.clone();
        async move { manager.revoke("logout").await }
    }

    /// Clear the session and profile without revoking. Returns whether a
    /// session was ended.
    pub fn end_session(&self) -> bool {
        let fetcher = &self.inner.fetcher;
        let mut ended = None;
        self.inner.state.send_modify(|snap| {
            fetcher.invalidate();
            let previous = std::mem::take(&mut snap.state);
            ended = previous.session().map(|s| s.access_token.clone());
            snap.loading = false;
        });
        log::info!("Session cleared");

        match ended {
            Some(token) => {
                self.remember_ended(token);
                true
            }
            None => false,
        }
    }

    /// Validate locally, send to the store and replace the profile with the
    /// record it returns. The stored profile is untouched on failure.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> AuthResult<Profile> {
        let action = "update_profile";
        let Some(user_id) = self.current_user() else {
            return Err(self.surface(action, AuthError::not_authenticated()));
        };
        if let Err(e) = update.validate() {
            return Err(self.surface(action, AuthError::from(e)));
        }

        let profile = match self.inner.fetcher.store().update(&user_id, update).await {
            Ok(profile) => profile,
            Err(err) if is_rejected_session(&err) => {
                self.expire_session(action, &user_id, &err).await;
                return Err(err);
            }
            Err(err) => return Err(self.surface(action, err)),
        };

        if self.apply_update(&user_id, profile.clone()) {
            log::info!("Profile updated for {}", user_id);
            Ok(profile)
        } else {
            log::debug!("Session moved on before update for {} landed", user_id);
            Err(AuthError::aborted())
        }
    }

    /// Re-fetch the current user's profile. `Ok(None)` when there is no
    /// record yet or a newer request superseded this one.
    pub async fn refresh_profile(&self) -> AuthResult<Option<Profile>> {
        let action = "refresh_profile";
        let Some(user_id) = self.current_user() else {
            return Err(self.surface(action, AuthError::not_authenticated()));
        };

        let fetcher = &self.inner.fetcher;
        let token = fetcher.begin(user_id);
        match fetcher.retrieve(&token).await {
            FetchOutcome::Loaded(profile) => {
                if self.apply_profile(&token, profile.clone()) {
                    Ok(Some(profile))
                } else {
                    Ok(None)
                }
            }
            FetchOutcome::NotFound | FetchOutcome::Aborted => Ok(None),
            FetchOutcome::Failed(err) if fetcher.is_current(&token) => {
                if is_rejected_session(&err) {
                    self.expire_session(action, &token.user_id, &err).await;
                    return Err(err);
                }
                Err(self.surface(action, err))
            }
            FetchOutcome::Failed(err) => {
                log::debug!("Ignoring failure of superseded refresh: {}", err);
                Ok(None)
            }
        }
    }

    pub fn clear_error(&self) {
        self.inner.state.send_if_modified(|snap| snap.last_error.take().is_some());
    }

    // =========================================================================
    // Runtime hooks
    // =========================================================================

    pub(crate) fn handle_event(&self, event: AuthEvent) {
        self.inner.resolved.store(true, Ordering::SeqCst);
        log::debug!("Reconciling {}", event.kind.as_str());

        let refetch = event.kind == AuthEventKind::UserUpdated;
        let session = match event.kind {
            AuthEventKind::SignedOut => None,
            // Describes the provider at subscribe time; a sign-in that has
            // completed since then stands
            AuthEventKind::InitialSession if event.session.is_none() => {
                self.inner.state.send_if_modified(|snap| {
                    let modified = snap.loading;
                    snap.loading = false;
                    modified
                });
                return;
            }
            _ => event.session,
        };

        if let Some(token) = self.commit_session(session, refetch) {
            self.notify_session_changed(token);
        }
    }

    pub(crate) fn provider_stream_closed(&self) {
        let message = "Auth provider event stream closed";
        log::warn!("{}", message);
        self.inner.fetcher.invalidate();
        self.inner.state.send_modify(|snap| {
            snap.state = SessionState::Error {
                message: message.to_string(),
            };
            snap.loading = false;
        });
        self.inner.diagnostics.record(
            DiagnosticLevel::Error,
            DiagnosticCategory::Auth,
            "auth_events",
            message,
            None,
        );
    }

    pub(crate) fn watchdog_expired(&self) {
        if self.inner.resolved.swap(true, Ordering::SeqCst) {
            return;
        }
        log::warn!(
            "No auth event within {}ms, releasing loading state",
            self.inner.watchdog.as_millis()
        );
        self.inner.state.send_if_modified(|snap| {
            let modified = snap.loading;
            snap.loading = false;
            modified
        });
    }

    /// Load the profile for a newly committed user and apply it if still
    /// current.
    pub(crate) async fn sync_profile(&self, token: FetchToken) {
        let fetcher = &self.inner.fetcher;

        match fetcher.retrieve(&token).await {
            FetchOutcome::Loaded(profile) => {
                if self.apply_profile(&token, profile) {
                    log::info!("Profile loaded for {}", token.user_id);
                }
            }
            FetchOutcome::NotFound => log::debug!("No profile yet for {}", token.user_id),
            FetchOutcome::Aborted => log::debug!("Profile fetch for {} aborted", token.user_id),
            FetchOutcome::Failed(err)
                if is_rejected_session(&err) && fetcher.is_current(&token) =>
            {
                self.expire_session("fetch_profile", &token.user_id, &err)
                    .await;
            }
            FetchOutcome::Failed(err) if fetcher.is_current(&token) => {
                log::warn!("Profile fetch for {} failed: {}", token.user_id, err);
                self.inner
                    .diagnostics
                    .record_auth_error("fetch_profile", &err);
            }
            FetchOutcome::Failed(err) => {
                log::debug!("Ignoring failure of superseded fetch: {}", err);
            }
        }
    }

    // =========================================================================
    // Commit helpers
    // =========================================================================

    /// Commit a provider-reported session. Returns the request token for the
    /// profile that must now be loaded, if any; it is issued under the same
    /// write as the session itself.
    fn commit_session(
        &self,
        session: Option<Session>,
        refetch_same_user: bool,
    ) -> Option<FetchToken> {
        if let Some(incoming) = session.as_ref().filter(|s| self.is_ended(s)) {
            log::debug!("Ignoring event for ended session of {}", incoming.user_id);
            return None;
        }

        let fetcher = &self.inner.fetcher;
        let mut to_fetch = None;

        self.inner.state.send_if_modified(|snap| {
            let mut modified = snap.loading;
            snap.loading = false;

            match session {
                None => {
                    if matches!(
                        snap.state,
                        SessionState::Authenticated { .. } | SessionState::Error { .. }
                    ) {
                        fetcher.invalidate();
                        snap.state = SessionState::Unauthenticated;
                        modified = true;
                    }
                }
                Some(session) => match &mut snap.state {
                    SessionState::Authenticated {
                        session: current, ..
                    } if current.same_user(&session) => {
                        // Token refresh keeps the loaded profile
                        if *current != session {
                            *current = session;
                            modified = true;
                        }
                        if refetch_same_user {
                            to_fetch = Some(fetcher.begin(current.user_id.clone()));
                        }
                    }
                    _ => {
                        // Supersedes every earlier request
                        to_fetch = Some(fetcher.begin(session.user_id.clone()));
                        snap.state = SessionState::Authenticated {
                            session,
                            profile: None,
                        };
                        modified = true;
                    }
                },
            }

            modified
        });

        to_fetch
    }

    /// The store no longer accepts `user_id`'s credentials: end the session
    /// as if the provider had signed it out. No-op once another user (or
    /// nobody) is signed in.
    async fn expire_session(&self, action: &str, user_id: &UserId, err: &AuthError) {
        let fetcher = &self.inner.fetcher;
        let mut ended = None;
        self.inner.state.send_if_modified(|snap| {
            if snap.state.user_id() != Some(user_id) {
                return false;
            }
            fetcher.invalidate();
            let previous = std::mem::take(&mut snap.state);
            ended = previous.session().map(|s| s.access_token.clone());
            snap.loading = false;
            snap.last_error = Some(LastError::from(err));
            true
        });

        let Some(token) = ended else {
            log::debug!("Rejected credentials for {} no longer in use", user_id);
            return;
        };
        self.remember_ended(token);
        log::warn!("Credentials for {} rejected, session ended", user_id);
        self.inner.diagnostics.record_auth_error(action, err);
        self.revoke(action).await;
    }

    async fn revoke(&self, action: &str) {
        if let Err(err) = self.inner.provider.sign_out().await {
            log::warn!("Remote sign-out failed: {}", err);
            self.inner.diagnostics.record_auth_error(action, &err);
        }
    }

    fn remember_ended(&self, token: AccessToken) {
        *self
            .inner
            .ended
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    fn is_ended(&self, session: &Session) -> bool {
        self.inner
            .ended
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|token| *token == session.access_token)
    }

    /// Apply a fetched profile if `token` is still the latest request and the
    /// session still belongs to its user. Check and write happen atomically.
    fn apply_profile(&self, token: &FetchToken, profile: Profile) -> bool {
        let fetcher = &self.inner.fetcher;
        let applied = self.inner.state.send_if_modified(|snap| {
            if !fetcher.is_current(token) {
                return false;
            }
            match &mut snap.state {
                SessionState::Authenticated {
                    session,
                    profile: slot,
                } if session.user_id == token.user_id => {
                    *slot = Some(profile);
                    true
                }
                _ => false,
            }
        });

        if !applied {
            log::debug!(
                "Dropping stale profile for {} (generation {})",
                token.user_id,
                token.generation
            );
        }
        applied
    }

    /// Replace the profile with the store's canonical record and make older
    /// in-flight fetches stale.
    fn apply_update(&self, user_id: &UserId, profile: Profile) -> bool {
        let fetcher = &self.inner.fetcher;
        self.inner.state.send_if_modified(|snap| match &mut snap.state {
            SessionState::Authenticated {
                session,
                profile: slot,
            } if &session.user_id == user_id => {
                fetcher.invalidate();
                *slot = Some(profile);
                true
            }
            _ => false,
        })
    }

    fn notify_session_changed(&self, token: FetchToken) {
        let guard = self
            .inner
            .changes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let Some(tx) = guard.as_ref() else {
            log::debug!(
                "No session runtime, profile for {} not synced",
                token.user_id
            );
            return;
        };
        if let Err(e) = tx.send(SessionChanged { token }) {
            log::debug!(
                "Session runtime stopped, profile for {} not synced",
                e.0.token.user_id
            );
        }
    }

    fn begin_sign_in(&self) -> SessionState {
        let mut previous = SessionState::default();
        self.inner.state.send_modify(|snap| {
            previous = std::mem::replace(&mut snap.state, SessionState::Authenticating);
            snap.loading = true;
            snap.last_error = None;
        });
        previous
    }

    fn finish_sign_in(
        &self,
        action: &str,
        previous: SessionState,
        result: AuthResult<Session>,
    ) -> AuthResult<Session> {
        match result {
            Ok(session) => {
                log::info!("Signed in as {}", session.email);
                self.inner
                    .ended
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .take();
                if let Some(token) = self.commit_session(Some(session.clone()), false) {
                    self.notify_session_changed(token);
                }
                Ok(session)
            }
            Err(err) => Err(self.fail_sign_in(action, previous, err)),
        }
    }

    /// Provider or transport failure moves to `Error`; anything the user can
    /// correct restores the state from before the attempt.
    fn fail_sign_in(&self, action: &str, previous: SessionState, err: AuthError) -> AuthError {
        let unrecoverable = matches!(
            err,
            AuthError::Provider { .. } | AuthError::Network { .. }
        );
        let message = err.user_message();

        self.inner.state.send_if_modified(|snap| {
            let mut modified = snap.loading;
            snap.loading = false;
            // An event may already have settled the attempt
            if matches!(snap.state, SessionState::Authenticating) {
                snap.state = if unrecoverable {
                    SessionState::Error { message }
                } else {
                    previous
                };
                modified = true;
            }
            modified
        });

        self.surface(action, err)
    }

    /// Record and publish a failure the caller is about to receive. Aborted
    /// work is neither recorded nor shown.
    fn surface(&self, action: &str, err: AuthError) -> AuthError {
        if err.is_aborted() {
            log::debug!("{} aborted", action);
            return err;
        }

        log::warn!("{} failed: {}", action, err);
        self.inner.diagnostics.record_auth_error(action, &err);
        let notice = LastError::from(&err);
        self.inner
            .state
            .send_modify(|snap| snap.last_error = Some(notice));
        err
    }
}

fn is_rejected_session(err: &AuthError) -> bool {
    matches!(err, AuthError::NotAuthenticated { .. })
}
