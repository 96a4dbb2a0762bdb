pub mod error;
pub mod models;
pub mod ports;

pub use error::auth_error::{AuthError, Result as AuthResult};
pub use error::{CoreError, Result as CoreResult};
pub use models::access_token::AccessToken;
pub use models::auth_event::{AuthEvent, AuthEventKind};
pub use models::award::Award;
pub use models::credentials::{Credentials, SignupRequest};
pub use models::document_kind::DocumentKind;
pub use models::education_entry::EducationEntry;
pub use models::language_skill::LanguageSkill;
pub use models::oauth_provider::OAuthProvider;
pub use models::profile::Profile;
pub use models::profile_update::ProfileUpdate;
pub use models::project::Project;
pub use models::session::Session;
pub use models::upload::{UploadFile, UploadReceipt};
pub use models::user_id::UserId;
pub use models::work_experience::WorkExperience;
pub use ports::auth_event_bus::{AuthEventBus, AuthEventStream};
pub use ports::auth_provider::AuthProvider;
pub use ports::document_store::DocumentStore;
pub use ports::profile_store::ProfileStore;

#[cfg(test)]
mod tests;
