use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("Could not read PDF text: {message} {location}")]
    Pdf {
        message: String,
        location: ErrorLocation,
    },
}

impl ResumeError {
    #[track_caller]
    pub fn pdf<S: Into<String>>(message: S) -> Self {
        ResumeError::Pdf {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message for the form when auto-fill fails
    pub fn user_message(&self) -> &'static str {
        "Could not auto-parse document. Please fill details manually."
    }
}

pub type Result<T> = std::result::Result<T, ResumeError>;
