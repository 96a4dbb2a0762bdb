use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DIAGNOSTICS_CAPACITY, MAX_DIAGNOSTICS_CAPACITY,
    MIN_DIAGNOSTICS_CAPACITY,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Entries kept in the in-memory ring buffer
    pub capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_DIAGNOSTICS_CAPACITY,
        }
    }
}

impl DiagnosticsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.capacity < MIN_DIAGNOSTICS_CAPACITY || self.capacity > MAX_DIAGNOSTICS_CAPACITY {
            return Err(ConfigError::config(format!(
                "diagnostics.capacity must be {}-{}, got {}",
                MIN_DIAGNOSTICS_CAPACITY, MAX_DIAGNOSTICS_CAPACITY, self.capacity
            )));
        }
        Ok(())
    }
}
