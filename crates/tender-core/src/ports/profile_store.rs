use crate::{AuthResult, Profile, ProfileUpdate, UserId};

use async_trait::async_trait;

/// Keyed profile records
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `Ok(None)` when no record exists yet for `id`
    async fn get_by_key(&self, id: &UserId) -> AuthResult<Option<Profile>>;

    /// Apply `update` and return the canonical record
    async fn update(&self, id: &UserId, update: &ProfileUpdate) -> AuthResult<Profile>;
}
