use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tender_core::AuthError;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error calling {endpoint}: {message} {location}")]
    Network {
        endpoint: String,
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error {status} from {endpoint}: {detail} {location}")]
    Api {
        status: u16,
        endpoint: String,
        detail: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("JSON parse error from {endpoint}: {message} {location}")]
    Json {
        endpoint: String,
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request to {endpoint} aborted: auth state changed while in flight {location}")]
    Aborted {
        endpoint: String,
        location: ErrorLocation,
    },

    #[error("Invalid request: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest transport error with endpoint context
    #[track_caller]
    pub fn network(endpoint: &str, err: reqwest::Error) -> Self {
        ClientError::Network {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with endpoint context
    #[track_caller]
    pub fn json(endpoint: &str, err: serde_json::Error) -> Self {
        ClientError::Json {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error from a non-2xx response body
    #[track_caller]
    pub fn api(status: u16, endpoint: &str, body: &[u8]) -> Self {
        let detail = ErrorDetail::parse(body);
        ClientError::Api {
            status,
            endpoint: endpoint.to_string(),
            detail: detail.message,
            field: detail.field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn aborted(endpoint: &str) -> Self {
        ClientError::Aborted {
            endpoint: endpoint.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        ClientError::InvalidRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of the failure. Transport failures report 0.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { .. } => Some(0),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Network { endpoint, .. }
            | Self::Api { endpoint, .. }
            | Self::Json { endpoint, .. }
            | Self::Aborted { endpoint, .. } => Some(endpoint),
            Self::InvalidRequest { .. } => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Map onto the session taxonomy.
    ///
    /// 401/403 mean the token is no longer accepted; 400/422 are request
    /// rejections. Endpoint-specific callers override this where a status
    /// means something else (e.g. 401 on sign-in).
    #[track_caller]
    pub fn into_auth_error(self) -> AuthError {
        match self {
            Self::Network {
                endpoint, message, ..
            } => AuthError::network(endpoint, message),
            Self::Aborted { .. } => AuthError::aborted(),
            Self::Api {
                status: 401 | 403, ..
            } => AuthError::not_authenticated(),
            Self::Api {
                status: 400 | 422,
                detail,
                field,
                ..
            } => AuthError::validation(detail, field),
            Self::Api { status, detail, .. } => AuthError::provider(detail, Some(status)),
            Self::Json { message, .. } => AuthError::provider(message, None),
            Self::InvalidRequest { message, .. } => AuthError::validation(message, None),
        }
    }
}

/// Human-readable failure reason extracted from an error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub message: String,
    pub field: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Value,
}

const FALLBACK_DETAIL: &str = "Request failed";

impl ErrorDetail {
    /// Understands `{"detail": "..."}` and the validation shape
    /// `{"detail": [{"loc": [..., "field"], "msg": "..."}]}`.
    pub fn parse(body: &[u8]) -> Self {
        let fallback = || ErrorDetail {
            message: String::from(FALLBACK_DETAIL),
            field: None,
        };

        let Ok(body) = serde_json::from_slice::<ErrorBody>(body) else {
            return fallback();
        };

        match body.detail {
            Value::String(message) => ErrorDetail {
                message,
                field: None,
            },
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if messages.is_empty() {
                    return fallback();
                }
                let field = items
                    .first()
                    .and_then(|item| item.get("loc"))
                    .and_then(Value::as_array)
                    .and_then(|loc| loc.last())
                    .and_then(Value::as_str)
                    .map(String::from);
                ErrorDetail {
                    message: messages.join("; "),
                    field,
                }
            }
            _ => fallback(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
