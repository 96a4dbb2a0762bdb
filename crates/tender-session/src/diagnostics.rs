use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tender_config::DiagnosticsConfig;
use tender_core::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCategory {
    Auth,
    Api,
    Network,
    Ui,
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticEntry {
    pub timestamp: DateTime<Utc>,
    pub level: DiagnosticLevel,
    pub category: DiagnosticCategory,
    pub action: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Bounded in-memory record of recent failures, newest first.
///
/// Cheap to clone; clones share the same buffer.
#[derive(Clone)]
pub struct Diagnostics {
    entries: Arc<Mutex<VecDeque<DiagnosticEntry>>>,
    capacity: usize,
}

impl Diagnostics {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn from_config(config: &DiagnosticsConfig) -> Self {
        Self::new(config.capacity)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn record<A: Into<String>, M: Into<String>>(
        &self,
        level: DiagnosticLevel,
        category: DiagnosticCategory,
        action: A,
        message: M,
        status: Option<u16>,
    ) {
        let entry = DiagnosticEntry {
            timestamp: Utc::now(),
            level,
            category,
            action: action.into(),
            message: message.into(),
            status,
        };

        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.push_front(entry);
        entries.truncate(self.capacity);
    }

    /// Classify and record an auth failure. Aborted work is not a failure
    /// and is skipped.
    pub fn record_auth_error(&self, action: &str, err: &AuthError) {
        match err {
            AuthError::Aborted { .. } => {}
            AuthError::Network { .. } => self.record(
                DiagnosticLevel::Error,
                DiagnosticCategory::Network,
                action,
                err.user_message(),
                err.status(),
            ),
            AuthError::Provider { status, .. } => {
                self.record_api_error(action, err.user_message(), *status)
            }
            AuthError::InvalidCredentials { .. }
            | AuthError::Validation { .. }
            | AuthError::NotAuthenticated { .. } => self.record(
                DiagnosticLevel::Warning,
                DiagnosticCategory::Auth,
                action,
                err.user_message(),
                None,
            ),
        }
    }

    /// Server-side failures (5xx) are critical
    pub fn record_api_error<M: Into<String>>(&self, action: &str, message: M, status: Option<u16>) {
        let level = match status {
            Some(code) if code >= 500 => DiagnosticLevel::Critical,
            _ => DiagnosticLevel::Error,
        };
        self.record(level, DiagnosticCategory::Api, action, message, status);
    }

    /// Snapshot, newest first
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::from_config(&DiagnosticsConfig::default())
    }
}
