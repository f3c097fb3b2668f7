use crate::credentials::{Credentials, RequestContext};
use crate::error::AuthError;
use crate::profile::UserProfile;

/// A trait for injecting the `authorize` callback of a credentials provider.
pub trait CredentialsAuthorizer: Send + Sync + 'static + Clone {
    /// Decides whether the caller is logged in.
    ///
    /// Returns `Ok(Some(user))` to proceed with a session, `Ok(None)` to reject.
    /// Errors are reserved for failures of the authorizer itself.
    fn authorize(
        &self,
        credentials: &Credentials,
        request: &RequestContext,
    ) -> impl Future<Output = Result<Option<UserProfile>, AuthError>> + Send;
}
