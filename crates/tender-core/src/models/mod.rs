pub mod access_token;
pub mod auth_event;
pub mod award;
pub mod credentials;
pub mod document_kind;
pub mod education_entry;
pub mod language_skill;
pub mod oauth_provider;
pub mod profile;
pub mod profile_update;
pub mod project;
pub mod session;
pub mod upload;
pub mod user_id;
pub mod work_experience;
