//! # Credentials Server Example
//!
//! Serves the login router with the placeholder authorizer.
//!
//! ## Usage
//!
//! ```sh
//! PASSGATE_JWT_SECRET=change-me cargo run --example credentials_server --features "server stub_auth"
//! ```
//!
//! Then:
//!
//! ```sh
//! curl -d 'username=alice&password=wrong' http://localhost:3000/api/auth/callback/credentials
//! ```

use passgate::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    // Don't use this in production! Every login succeeds as the same user.
    let provider = CredentialsProvider::new(FixedUserAuthorizer);

    let mut config = PassgateServerConfig::default();
    if let Ok(secret) = env::var("PASSGATE_JWT_SECRET") {
        config.jwt_secret = secret;
    } else {
        tracing::warn!("PASSGATE_JWT_SECRET not set, using the development secret");
    }

    // Build App
    let app = PassgateServer::new(config).build(provider);

    // Serve
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{port}");
    tracing::info!("Server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
