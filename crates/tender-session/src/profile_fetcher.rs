use crate::{FetchGeneration, FetchToken};

use std::sync::Arc;

use tender_core::{AuthError, Profile, ProfileStore, UserId};

/// Result of one store round trip, before the staleness check
#[derive(Debug)]
pub enum FetchOutcome {
    Loaded(Profile),
    /// No record yet; a valid state for a new user
    NotFound,
    Aborted,
    Failed(AuthError),
}

impl FetchOutcome {
    pub fn into_profile(self) -> Option<Profile> {
        match self {
            Self::Loaded(profile) => Some(profile),
            _ => None,
        }
    }
}

/// Loads profiles with last-request-wins semantics.
///
/// Each request is stamped by [`ProfileFetcher::begin`]. Whoever applies the
/// outcome checks [`ProfileFetcher::is_current`] at that moment, so an earlier
/// request that resolves late is discarded no matter the completion order.
pub struct ProfileFetcher {
    store: Arc<dyn ProfileStore>,
    generation: FetchGeneration,
}

impl ProfileFetcher {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self {
            store,
            generation: FetchGeneration::new(),
        }
    }

    pub fn store(&self) -> &Arc<dyn ProfileStore> {
        &self.store
    }

    /// Stamp a new request for `user_id`
    pub fn begin(&self, user_id: UserId) -> FetchToken {
        self.generation.issue(user_id)
    }

    /// Run the store call for `token`. Does not check staleness.
    pub async fn retrieve(&self, token: &FetchToken) -> FetchOutcome {
        match self.store.get_by_key(&token.user_id).await {
            Ok(Some(profile)) => FetchOutcome::Loaded(profile),
            Ok(None) => FetchOutcome::NotFound,
            Err(e) if e.is_aborted() => FetchOutcome::Aborted,
            Err(e) => FetchOutcome::Failed(e),
        }
    }

    pub fn is_current(&self, token: &FetchToken) -> bool {
        self.generation.is_current(token)
    }

    /// Make every in-flight request stale
    pub fn invalidate(&self) {
        let generation = self.generation.bump();
        log::debug!("Profile fetches invalidated, generation now {}", generation);
    }

    /// Fetch once and return the profile only if this is still the latest
    /// request when it resolves.
    pub async fn fetch(&self, user_id: UserId) -> Option<Profile> {
        let token = self.begin(user_id);
        let outcome = self.retrieve(&token).await;

        if !self.is_current(&token) {
            log::debug!(
                "Dropping stale profile result for {} (generation {})",
                token.user_id,
                token.generation
            );
            return None;
        }

        match outcome {
            FetchOutcome::Loaded(profile) => Some(profile),
            FetchOutcome::NotFound => {
                log::debug!("No profile yet for {}", token.user_id);
                None
            }
            FetchOutcome::Aborted => {
                log::debug!("Profile fetch for {} aborted", token.user_id);
                None
            }
            FetchOutcome::Failed(e) => {
                log::warn!("Profile fetch for {} failed: {}", token.user_id, e);
                None
            }
        }
    }
}
