//! # Passgate
//!
//! A minimal credentials login flow: a single "Credentials" provider, a pluggable
//! `authorize` callback and stateless signed sessions.
//!
//! This crate serves as an entry point, re-exporting the core types and
//! optionally including the router and the placeholder authorizer via feature flags.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | **`server`** | Includes the Axum-based login router (`passgate_server`). |
//! | **`stub_auth`** | Placeholder authorizer that accepts every login (`passgate_auth_stub`). |
//!
//! ## Example: Custom Server
//!
//! ```toml
//! [dependencies]
//! passgate = { version = "0.1", features = ["server", "stub_auth"] }
//! ```
//!
//! ```rust,ignore
//! use passgate::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = CredentialsProvider::new(FixedUserAuthorizer);
//!
//!     // Build
//!     let app = PassgateServer::default().build(provider);
//!
//!     // Serve
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub use passgate_core::*;

#[cfg(feature = "server")]
pub mod server {
    pub use passgate_server::*;
}

#[cfg(feature = "stub_auth")]
pub mod auth_stub {
    pub use passgate_auth_stub::*;
}

pub mod prelude {
    pub use passgate_core::prelude::*;

    #[cfg(feature = "server")]
    pub use passgate_server::prelude::*;

    #[cfg(feature = "stub_auth")]
    pub use passgate_auth_stub::FixedUserAuthorizer;
}
