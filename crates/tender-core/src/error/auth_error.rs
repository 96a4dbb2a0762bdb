use crate::CoreError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure taxonomy shared by the provider boundary and the session layer.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider error: {message} {location}")]
    Provider {
        message: String,
        status: Option<u16>,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Network error calling {endpoint}: {message} {location}")]
    Network {
        endpoint: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Operation aborted {location}")]
    Aborted { location: ErrorLocation },

    #[error("Not authenticated {location}")]
    NotAuthenticated { location: ErrorLocation },
}

impl AuthError {
    #[track_caller]
    pub fn invalid_credentials<S: Into<String>>(message: S) -> Self {
        AuthError::InvalidCredentials {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AuthError::Provider {
            message: message.into(),
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<String>) -> Self {
        AuthError::Validation {
            message: message.into(),
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network<E: Into<String>, M: Into<String>>(endpoint: E, message: M) -> Self {
        AuthError::Network {
            endpoint: endpoint.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn aborted() -> Self {
        AuthError::Aborted {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        AuthError::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Superseded or cancelled work. Never shown to the user.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }

    /// HTTP status associated with the failure. Transport failures report 0.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Provider { status, .. } => *status,
            Self::Network { .. } => Some(0),
            _ => None,
        }
    }

    /// Message suitable for an inline form error (no source location).
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials { message, .. } => message.clone(),
            Self::Provider { message, .. } => message.clone(),
            Self::Validation { message, .. } => message.clone(),
            Self::Network { .. } => String::from("Network error, check your connection"),
            Self::Aborted { .. } => String::from("Request cancelled"),
            Self::NotAuthenticated { .. } => String::from("You are not signed in"),
        }
    }

    /// Stable code for logs and diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::Provider { .. } => "PROVIDER_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Network { .. } => "NETWORK_ERROR",
            Self::Aborted { .. } => "ABORTED",
            Self::NotAuthenticated { .. } => "NOT_AUTHENTICATED",
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let field = err.field().map(String::from);
        let message = match &err {
            CoreError::Validation { message, .. } => message.clone(),
            other => other.to_string(),
        };
        AuthError::Validation {
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, AuthError>;
