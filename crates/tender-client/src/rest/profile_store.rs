use crate::{ApiClient, ClientError};

use std::sync::Arc;

use async_trait::async_trait;
use tender_core::{AuthError, AuthResult, Profile, ProfileStore, ProfileUpdate, UserId};

/// [`ProfileStore`] over `/users/me`.
///
/// The API only exposes the token owner's record, so a result for a
/// different user means the token moved underneath the call.
pub struct RestProfileStore {
    api: Arc<ApiClient>,
}

impl RestProfileStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[track_caller]
fn check_owner(id: &UserId, profile: Profile) -> AuthResult<Profile> {
    if &profile.id != id {
        log::debug!("Profile for {} returned while fetching {}", profile.id, id);
        return Err(AuthError::aborted());
    }
    Ok(profile)
}

#[async_trait]
impl ProfileStore for RestProfileStore {
    async fn get_by_key(&self, id: &UserId) -> AuthResult<Option<Profile>> {
        match self.api.get_me().await {
            Ok(profile) => check_owner(id, profile).map(Some),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into_auth_error()),
        }
    }

    async fn update(&self, id: &UserId, update: &ProfileUpdate) -> AuthResult<Profile> {
        let profile = self
            .api
            .update_me(update)
            .await
            .map_err(ClientError::into_auth_error)?;
        check_owner(id, profile)
    }
}
