//! tender-client
//!
//! HTTP JSON client for the Tender REST API and the REST-backed
//! implementations of the auth provider, profile store and document store.

pub(crate) mod client;
pub(crate) mod rest;

pub use client::{
    ApiClient, AuthResponse, AuthUser, ClientError, ClientResult, ErrorDetail,
};
pub use rest::{RestAuthProvider, RestDocumentStore, RestProfileStore};
