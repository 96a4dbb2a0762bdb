pub(crate) mod auth_provider;
pub(crate) mod document_store;
pub(crate) mod profile_store;

pub use auth_provider::RestAuthProvider;
pub use document_store::RestDocumentStore;
pub use profile_store::RestProfileStore;
