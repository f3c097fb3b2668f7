use crate::{api, prelude::*};

use axum::{
    Router,
    routing::{get, post},
};
use passgate_core::prelude::*;
use tower_http::trace::TraceLayer;

/// The builder for the login router.
#[derive(Clone, Debug, Default)]
pub struct PassgateServer {
    config: PassgateServerConfig,
}

impl PassgateServer {
    pub fn new(config: PassgateServerConfig) -> Self {
        Self { config }
    }
}

#[derive(Clone, Debug)]
pub struct PassgateServerConfig {
    /// Prefix of every auth route.
    ///
    /// Defaults to `/api/auth`.
    pub base_path: String,
    /// The secret used to sign session tokens.
    ///
    /// **NOTE:** The default is only fit for local development.
    pub jwt_secret: String,
    /// Session lifetime in seconds.
    ///
    /// Defaults to 30 days.
    pub session_max_age: u64,
}

impl Default for PassgateServerConfig {
    fn default() -> Self {
        Self {
            base_path: routes::BASE_PATH.to_string(),
            jwt_secret: "TOP_SECRET".to_string(),
            session_max_age: 60 * 60 * 24 * 30,
        }
    }
}

impl PassgateServer {
    pub fn build<A: CredentialsAuthorizer>(self, provider: CredentialsProvider<A>) -> Router {
        let PassgateServerConfig {
            base_path,
            jwt_secret,
            session_max_age,
        } = self.config;
        let base_path = base_path.trim_end_matches('/').to_string();

        let state = AppState {
            provider,
            jwt: JwtService::new(&jwt_secret),
            base_path: base_path.clone(),
            session_max_age,
        };

        Router::new()
            .route(routes::HEALTH, get(|| async { "OK" }))
            .route(&format!("{base_path}{}", routes::PROVIDERS), get(api::list_providers))
            .route(&format!("{base_path}{}", routes::SIGNIN), get(api::signin))
            .route(
                &format!("{base_path}{}", routes::CALLBACK_BY_PROVIDER),
                post(api::callback),
            )
            .route(&format!("{base_path}{}", routes::SESSION), get(api::session))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
