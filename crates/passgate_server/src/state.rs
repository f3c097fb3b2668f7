use crate::jwt::JwtService;

use passgate_core::prelude::*;

#[derive(Clone)]
pub struct AppState<A: CredentialsAuthorizer> {
    pub provider: CredentialsProvider<A>,
    pub jwt: JwtService,
    /// Normalized, without a trailing slash.
    pub base_path: String,
    pub session_max_age: u64,
}

impl<A: CredentialsAuthorizer> AppState<A> {
    pub fn signin_url(&self) -> String {
        format!("{}{}", self.base_path, routes::SIGNIN)
    }

    pub fn callback_url(&self) -> String {
        format!("{}{}/{}", self.base_path, routes::CALLBACK, self.provider.id())
    }
}
