pub(crate) mod api_client;
pub(crate) mod auth_response;
pub(crate) mod error;

pub use api_client::ApiClient;
pub use auth_response::{AuthResponse, AuthUser};
pub use error::{ClientError, ErrorDetail, Result as ClientResult};
