use crate::SessionManager;
use crate::session_manager::SessionChanged;

use std::time::Duration;

use tender_core::AuthEventStream;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};

/// Owns the background tasks of a started [`SessionManager`].
///
/// Dropping the guard aborts the tasks, which also drops the provider
/// subscription and any profile fetch still in flight.
pub struct SessionRuntime {
    reconcile: JoinHandle<()>,
    sync: JoinHandle<()>,
    watchdog: JoinHandle<()>,
}

impl SessionRuntime {
    pub(crate) fn spawn(
        manager: SessionManager,
        events: AuthEventStream,
        changes: mpsc::UnboundedReceiver<SessionChanged>,
        watchdog: Duration,
    ) -> Self {
        let reconcile = tokio::spawn(reconcile_events(manager.clone(), events));
        let sync = tokio::spawn(sync_profiles(manager.clone(), changes));
        let watchdog = tokio::spawn(async move {
            tokio::time::sleep(watchdog).await;
            manager.watchdog_expired();
        });

        Self {
            reconcile,
            sync,
            watchdog,
        }
    }

    /// Event stream still being reconciled
    pub fn is_running(&self) -> bool {
        !self.reconcile.is_finished()
    }

    pub fn shutdown(self) {
        log::debug!("Session runtime shutting down");
    }
}

impl Drop for SessionRuntime {
    fn drop(&mut self) {
        self.reconcile.abort();
        self.sync.abort();
        self.watchdog.abort();
    }
}

async fn reconcile_events(manager: SessionManager, mut events: AuthEventStream) {
    while let Some(event) = events.next().await {
        manager.handle_event(event);
    }
    manager.provider_stream_closed();
}

/// Spawn one fetch per session change. Fetches run concurrently; only the
/// latest one can apply its result.
async fn sync_profiles(
    manager: SessionManager,
    mut changes: mpsc::UnboundedReceiver<SessionChanged>,
) {
    let mut fetches = JoinSet::new();

    loop {
        tokio::select! {
            change = changes.recv() => match change {
                Some(SessionChanged { token }) => {
                    let manager = manager.clone();
                    fetches.spawn(async move { manager.sync_profile(token).await });
                }
                None => break,
            },
            Some(result) = fetches.join_next(), if !fetches.is_empty() => {
                if let Err(e) = result {
                    log::warn!("Profile sync task failed: {}", e);
                }
            }
        }
    }

    while let Some(result) = fetches.join_next().await {
        if let Err(e) = result {
            log::warn!("Profile sync task failed: {}", e);
        }
    }
}
