use serde::Deserialize;
use tender_core::{AccessToken, Session, UserId};

/// Body of `/auth/signup` and `/auth/login/json`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: AccessToken,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_token_type() -> String {
    String::from("bearer")
}

fn default_active() -> bool {
    true
}

impl AuthResponse {
    pub fn into_session(self) -> Session {
        Session {
            access_token: self.access_token,
            token_type: self.token_type,
            user_id: self.user.id,
            email: self.user.email,
        }
    }
}
