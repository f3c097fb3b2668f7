use crate::error::AuthError;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// A username/password pair submitted for a single login attempt.
///
/// Both fields are required but may be empty. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The raw login form as posted by the browser.
///
/// Unknown fields (e.g. `csrfToken`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl TryFrom<CredentialsForm> for Credentials {
    type Error = AuthError;

    fn try_from(form: CredentialsForm) -> Result<Self, Self::Error> {
        match (form.username, form.password) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            _ => Err(AuthError::Missing),
        }
    }
}

/// The inbound request a login attempt arrived on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub method: String,
    pub path: String,
    /// Header names are lower-cased. Non-UTF-8 values are skipped.
    pub headers: BTreeMap<String, String>,
}

impl RequestContext {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
