pub mod auth_event_bus;
pub mod auth_provider;
pub mod document_store;
pub mod profile_store;
