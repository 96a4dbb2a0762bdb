use std::path::PathBuf;

use tender_core::AuthError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] tender_config::ConfigError),

    #[error("{}", .0.user_message())]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Input(#[from] tender_core::CoreError),

    #[error("{}", .0.user_message())]
    Resume(#[from] tender_resume::ResumeError),

    #[error("Failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Startup error: {message}")]
    Startup { message: String },
}

impl CliError {
    /// Stable code for scripted callers
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "CONFIG_ERROR",
            CliError::Auth(e) => e.error_code(),
            CliError::Input(_) => "INVALID_INPUT",
            CliError::Resume(_) => "PARSE_ERROR",
            CliError::File { .. } => "FILE_ERROR",
            CliError::Json(_) => "OUTPUT_ERROR",
            CliError::Startup { .. } => "STARTUP_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
