//! Persisted session token.
//!
//! Written after a successful sign-in so the next process start can restore
//! the session as the provider's initial event. Removed on sign-out.
//!
//! File location: `<config_dir>/session.json`

use crate::{ConfigError, ConfigErrorResult};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tender_core::Session;

const TOKEN_FILENAME: &str = "session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenFile {
    pub session: Session,
    /// ISO 8601 timestamp of the sign-in that produced the token
    pub saved_at: String,
}

impl TokenFile {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            saved_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(TOKEN_FILENAME)
    }

    /// Write the token file, creating the config directory if needed.
    pub fn write_in(&self, config_dir: &Path) -> ConfigErrorResult<PathBuf> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let path = Self::path_in(config_dir);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::token(format!("Failed to serialize token file: {e}")))?;

        std::fs::write(&path, content).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }

    /// Returns `Ok(None)` if the file does not exist.
    /// Returns `Err` if the file exists but cannot be read or parsed.
    pub fn read_in(config_dir: &Path) -> ConfigErrorResult<Option<TokenFile>> {
        let path = Self::path_in(config_dir);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let file: TokenFile = serde_json::from_str(&content).map_err(|e| {
            ConfigError::token(format!("Invalid token file {}: {e}", path.display()))
        })?;

        Ok(Some(file))
    }

    /// Remove the token file. Missing file is not an error.
    pub fn remove_in(config_dir: &Path) -> ConfigErrorResult<()> {
        let path = Self::path_in(config_dir);

        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Removed token file {}", path.display());
        }

        Ok(())
    }
}
