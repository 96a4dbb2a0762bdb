use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ABORT_RETRY_DELAY_MS, DEFAULT_UPLOAD_MAX_SIZE_BYTES,
    MAX_ABORT_RETRY_DELAY_MS, MAX_UPLOAD_MAX_SIZE_BYTES,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_size_bytes: u64,
    /// Delay before the single retry after an aborted upload
    pub abort_retry_delay_ms: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: DEFAULT_UPLOAD_MAX_SIZE_BYTES,
            abort_retry_delay_ms: DEFAULT_ABORT_RETRY_DELAY_MS,
        }
    }
}

impl UploadConfig {
    pub fn abort_retry_delay(&self) -> Duration {
        Duration::from_millis(self.abort_retry_delay_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_size_bytes == 0 || self.max_size_bytes > MAX_UPLOAD_MAX_SIZE_BYTES {
            return Err(ConfigError::upload(format!(
                "upload.max_size_bytes must be 1-{}, got {}",
                MAX_UPLOAD_MAX_SIZE_BYTES, self.max_size_bytes
            )));
        }

        if self.abort_retry_delay_ms > MAX_ABORT_RETRY_DELAY_MS {
            return Err(ConfigError::upload(format!(
                "upload.abort_retry_delay_ms must be at most {}, got {}",
                MAX_ABORT_RETRY_DELAY_MS, self.abort_retry_delay_ms
            )));
        }

        Ok(())
    }
}
