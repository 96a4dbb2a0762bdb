use std::sync::atomic::{AtomicU64, Ordering};

use tender_core::UserId;

/// Monotonic counter identifying the latest profile request.
#[derive(Debug, Default)]
pub struct FetchGeneration {
    current: AtomicU64,
}

/// Stamp carried by one profile request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchToken {
    pub generation: u64,
    pub user_id: UserId,
}

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new request; every earlier token becomes stale
    pub fn issue(&self, user_id: UserId) -> FetchToken {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        FetchToken {
            generation,
            user_id,
        }
    }

    /// Make every outstanding token stale without issuing a new one
    pub fn bump(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, token: &FetchToken) -> bool {
        token.generation == self.current()
    }
}
