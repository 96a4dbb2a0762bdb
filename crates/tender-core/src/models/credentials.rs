use crate::{CoreError, CoreResult};

use std::fmt;

use serde::Serialize;

/// Email/password pair for password sign-in
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new<E: Into<String>, P: Into<String>>(email: E, password: P) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(CoreError::validation("password", "Password is required"));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Account creation payload
#[derive(Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl SignupRequest {
    pub fn new<E: Into<String>, P: Into<String>, N: Into<String>>(
        email: E,
        password: P,
        name: N,
    ) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
            name: name.into().trim().to_string(),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(CoreError::validation("password", "Password is required"));
        }
        if self.name.is_empty() {
            return Err(CoreError::validation("name", "Name is required"));
        }
        Ok(())
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .field("name", &self.name)
            .finish()
    }
}

fn validate_email(email: &str) -> CoreResult<()> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(CoreError::validation(
            "email",
            format!("'{}' is not a valid email address", email),
        )),
    }
}
