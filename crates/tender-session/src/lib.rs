//! tender-session
//!
//! Owns the authenticated session and the profile subordinate to it.
//!
//! The [`SessionManager`] reconciles provider auth events, commits session
//! changes, and hands profile loading to a separate sync task. Every profile
//! result carries a [`FetchToken`] and is dropped unless it is still the
//! latest request for the current user.

pub mod diagnostics;
pub mod fetch_generation;
pub mod profile_fetcher;
pub mod session_manager;
pub mod session_runtime;
pub mod session_state;
pub mod upload;

pub use diagnostics::{DiagnosticCategory, DiagnosticEntry, DiagnosticLevel, Diagnostics};
pub use fetch_generation::{FetchGeneration, FetchToken};
pub use profile_fetcher::{FetchOutcome, ProfileFetcher};
pub use session_manager::SessionManager;
pub use session_runtime::SessionRuntime;
pub use session_state::{LastError, SessionSnapshot, SessionState};
pub use upload::{ALLOWED_EXTENSIONS, ALLOWED_MIME_TYPES, DocumentUploader};

#[cfg(test)]
mod tests;
