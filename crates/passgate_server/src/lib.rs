//! # Passgate Server
//!
//! An Axum-based login router for a single "Credentials" provider.
//!
//! Provides the [`PassgateServer`] builder, which takes a [`CredentialsProvider`](passgate_core::provider::CredentialsProvider)
//! and serves the login form, the credentials callback and a stateless session endpoint.
//!
//! ## Routes
//!
//! Relative to the configured base path (`/api/auth` by default):
//!
//! * **`GET /providers`**: the configured provider and its URLs.
//! * **`GET /signin`**: an HTML login form built from the provider's field metadata.
//! * **`POST /callback/{provider}`**: form login. Mints a signed session token on success.
//! * **`GET /session`**: resolves a bearer token back into the session, or `{}` without one.
//!
//! ## Example
//!
//! ```no_run
//! use passgate_server::prelude::*;
//! use passgate_core::prelude::*;
//! use passgate_auth_stub::FixedUserAuthorizer;
//!
//! # async fn run() {
//! let provider = CredentialsProvider::new(FixedUserAuthorizer);
//!
//! let app = PassgateServer::default().build(provider);
//! # }
//! ```

mod api;
mod server;
mod signin_page;

pub mod auth;
pub mod jwt;
pub mod state;

pub use api::ApiError;
pub use server::{PassgateServer, PassgateServerConfig};

pub mod prelude {
    pub use crate::auth::*;
    pub use crate::jwt::*;
    pub use crate::state::*;
    pub use crate::{PassgateServer, PassgateServerConfig};
}
