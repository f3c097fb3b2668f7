//! # Passgate Auth Stub
//!
//! A placeholder `authorize` callback for the "Credentials" provider.
//!
//! **WARNING**: This authorizer never looks at the submitted username or password.
//! Every login attempt succeeds as the same user (`id=1`, `"J Smith"`).
//!
//! This is a known gap, not a feature. Real credential verification needs a product and
//! security decision before this is used anywhere that matters.
//!
//! ## Usage
//!
//! ```rust
//! # use passgate_auth_stub::FixedUserAuthorizer;
//! # use passgate_core::prelude::*;
//! # fn main() {
//! let provider = CredentialsProvider::new(FixedUserAuthorizer);
//! # }
//! ```

use passgate_core::prelude::*;

pub const FIXED_USER_ID: i64 = 1;
pub const FIXED_USER_NAME: &str = "J Smith";

/// Builds the identity every login resolves to. A fresh value per call.
pub fn fixed_user() -> UserProfile {
    UserProfile {
        id: FIXED_USER_ID,
        name: FIXED_USER_NAME.to_string(),
        email: String::new(),
        image: String::new(),
    }
}

#[derive(Clone, Debug, Default)]
pub struct FixedUserAuthorizer;

impl CredentialsAuthorizer for FixedUserAuthorizer {
    async fn authorize(
        &self,
        _credentials: &Credentials,
        _request: &RequestContext,
    ) -> Result<Option<UserProfile>, AuthError> {
        Ok(Some(fixed_user()))
    }
}
