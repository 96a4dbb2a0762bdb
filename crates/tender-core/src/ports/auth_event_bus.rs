use crate::AuthEvent;

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

const DEFAULT_CAPACITY: usize = 16;

/// Fan-out channel a provider uses to push auth state changes.
#[derive(Clone)]
pub struct AuthEventBus {
    tx: broadcast::Sender<AuthEvent>,
}

impl AuthEventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Push an event to every live subscriber. No subscribers is not an error.
    pub fn publish(&self, event: AuthEvent) {
        log::debug!("Auth event {}", event.kind.as_str());
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> AuthEventStream {
        AuthEventStream::new(self.tx.subscribe(), None)
    }

    /// Subscribe and receive `initial` before anything published afterwards
    pub fn subscribe_with_initial(&self, initial: AuthEvent) -> AuthEventStream {
        AuthEventStream::new(self.tx.subscribe(), Some(initial))
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for AuthEventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// One subscription to a provider's event stream.
///
/// Dropping the stream unsubscribes.
pub struct AuthEventStream {
    receiver: broadcast::Receiver<AuthEvent>,
    pending: Option<AuthEvent>,
}

impl AuthEventStream {
    pub fn new(receiver: broadcast::Receiver<AuthEvent>, initial: Option<AuthEvent>) -> Self {
        Self {
            receiver,
            pending: initial,
        }
    }

    /// Next event, or `None` once the provider has gone away.
    pub async fn next(&mut self) -> Option<AuthEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(missed)) => {
                    // Later events supersede the dropped ones
                    log::warn!("Auth event stream lagged, skipped {} events", missed);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
