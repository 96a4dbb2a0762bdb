//! tender-cli library
//!
//! Command definitions and the runner that executes them against the
//! session stack. The `tender` binary is a thin wrapper around [`run`].

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod documents;
pub(crate) mod error;
pub mod logger;
pub(crate) mod profile_args;
pub(crate) mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::{Commands, DEFAULT_OAUTH_REDIRECT};
pub use error::{CliError, Result as CliResult};
pub use profile_args::ProfileArgs;
pub use runner::{Outcome, Runner, run};
