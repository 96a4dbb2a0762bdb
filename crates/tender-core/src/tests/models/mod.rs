mod credentials;
mod oauth_provider;
mod profile;
mod profile_update;
mod session;
mod user_id;
