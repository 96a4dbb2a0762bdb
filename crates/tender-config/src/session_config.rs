use crate::{ConfigError, ConfigErrorResult, DEFAULT_WATCHDOG_MS, MAX_WATCHDOG_MS, MIN_WATCHDOG_MS};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How long to wait for the provider's first event before releasing the
    /// loading flag
    pub watchdog_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            watchdog_ms: DEFAULT_WATCHDOG_MS,
        }
    }
}

impl SessionConfig {
    pub fn watchdog(&self) -> Duration {
        Duration::from_millis(self.watchdog_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.watchdog_ms < MIN_WATCHDOG_MS || self.watchdog_ms > MAX_WATCHDOG_MS {
            return Err(ConfigError::session(format!(
                "session.watchdog_ms must be {}-{}, got {}",
                MIN_WATCHDOG_MS, MAX_WATCHDOG_MS, self.watchdog_ms
            )));
        }
        Ok(())
    }
}
