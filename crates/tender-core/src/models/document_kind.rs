use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Profile document slots backed by the file endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    Transcript,
}

impl DocumentKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Resume => "resume",
            Self::Transcript => "transcript",
        }
    }
}

impl FromStr for DocumentKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "resume" | "cv" => Ok(Self::Resume),
            "transcript" => Ok(Self::Transcript),
            _ => Err(CoreError::InvalidDocumentKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
