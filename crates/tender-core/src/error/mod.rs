pub mod auth_error;

// -------------------------------------------------------------------------- //

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid OAuth provider: {value} {location}")]
    InvalidOAuthProvider {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid document kind: {value} {location}")]
    InvalidDocumentKind {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error tied to a specific field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field that failed validation, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
