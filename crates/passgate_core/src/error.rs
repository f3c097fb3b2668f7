use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The authorizer looked at the credentials and returned no user.
    /// Maps to **HTTP 401 Unauthorized**.
    #[error("Unauthorized: Credentials rejected")]
    Rejected,

    /// A credential field or the session token is missing.
    /// Maps to **HTTP 401**.
    #[error("Unauthorized: Credentials missing")]
    Missing,

    /// The session token is invalid.
    /// Maps to **HTTP 401**.
    #[error("Unauthorized: Session invalid")]
    Invalid,

    /// The session token is valid but has expired.
    /// Maps to **HTTP 401**.
    #[error("Unauthorized: Session expired")]
    Expired,

    /// The request named a provider that is not configured.
    /// Maps to **HTTP 404 Not Found**.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Generic system or authorizer failure.
    /// Maps to **HTTP 500 Internal Server Error**.
    #[error("Auth system failure: {0}")]
    System(String),
}
