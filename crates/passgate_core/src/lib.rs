//! # Passgate Core
//!
//! Types and traits shared by the passgate crates.
//!
//! Defines the contract between the login router and the code that decides who is logged in.
//!
//! - **[`Credentials`](credentials::Credentials)**: The username/password pair submitted per login attempt.
//! - **[`UserProfile`](profile::UserProfile)**: The identity returned on successful authorization.
//! - **[`CredentialsAuthorizer`](traits::CredentialsAuthorizer)**: Trait for implementing the `authorize` callback.
//! - **[`CredentialsProvider`](provider::CredentialsProvider)**: The "Credentials" provider configuration the router serves.

pub mod constants;
pub mod credentials;
pub mod error;
pub mod profile;
pub mod provider;
pub mod traits;

pub mod prelude {
    pub use super::constants::*;
    pub use super::credentials::*;
    pub use super::error::*;
    pub use super::profile::*;
    pub use super::provider::*;
    pub use super::traits::*;
}
