use crate::{AccessToken, UserId};

use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// Authenticated identity and token material for the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: AccessToken,
    pub token_type: String,
    pub user_id: UserId,
    pub email: String,
}

impl Session {
    pub fn new(access_token: AccessToken, user_id: UserId, email: String) -> Self {
        Self {
            access_token,
            token_type: String::from(DEFAULT_TOKEN_TYPE),
            user_id,
            email,
        }
    }

    /// Same identity, possibly different token material
    pub fn same_user(&self, other: &Session) -> bool {
        self.user_id == other.user_id
    }
}
