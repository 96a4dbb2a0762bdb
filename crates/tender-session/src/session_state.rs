use tender_core::{AuthError, Profile, Session, UserId};

/// Where the client stands with the identity provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticating,
    Authenticated {
        session: Session,
        profile: Option<Profile>,
    },
    /// Provider failed in a way the client cannot recover from on its own
    Error { message: String },
}

impl SessionState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticating => "authenticating",
            Self::Authenticated { profile: None, .. } => "authenticated",
            Self::Authenticated {
                profile: Some(_), ..
            } => "authenticated_with_profile",
            Self::Error { .. } => "error",
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated { session, .. } => Some(session),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Authenticated { profile, .. } => profile.as_ref(),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.session().map(|s| &s.user_id)
    }
}

/// Surfaced failure kept for display until cleared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastError {
    pub code: String,
    pub message: String,
    pub field: Option<String>,
}

impl From<&AuthError> for LastError {
    fn from(err: &AuthError) -> Self {
        let field = match err {
            AuthError::Validation { field, .. } => field.clone(),
            _ => None,
        };
        Self {
            code: err.error_code().to_string(),
            message: err.user_message(),
            field,
        }
    }
}

/// Read-only view handed to consumers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    /// Session resolution or a sign-in is pending
    pub loading: bool,
    pub last_error: Option<LastError>,
}

impl SessionSnapshot {
    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.state.profile()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.session().is_some()
    }
}
