use crate::{prelude::*, signin_page};

use axum::{
    Form, Json,
    extract::{Path, State, rejection::FormRejection},
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use passgate_core::prelude::*;
use std::collections::BTreeMap;
use tracing::{error, info, warn};

pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Some(err) = self.0.downcast_ref::<AuthError>() {
            return match err {
                AuthError::Rejected
                | AuthError::Missing
                | AuthError::Invalid
                | AuthError::Expired => (StatusCode::UNAUTHORIZED, err.to_string()),
                AuthError::UnknownProvider(_) => (StatusCode::NOT_FOUND, err.to_string()),
                AuthError::System(_) => {
                    error!("Internal Auth Error: {:?}", self.0);
                    (StatusCode::INTERNAL_SERVER_ERROR, "Auth Error".to_string())
                }
            }
            .into_response();
        }

        error!("Internal Server Error: {:?}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
            .into_response()
    }
}

fn request_context(method: &Method, uri: &Uri, headers: &HeaderMap) -> RequestContext {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
        })
        .collect();

    RequestContext {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers,
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ProviderSummary {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: &'static str,
    signin_url: String,
    callback_url: String,
}

/// GET {base}/providers
pub async fn list_providers<A: CredentialsAuthorizer>(
    State(state): State<AppState<A>>,
) -> impl IntoResponse {
    let provider = &state.provider;
    let summary = ProviderSummary {
        id: provider.id().to_string(),
        name: provider.name().to_string(),
        kind: providers::CREDENTIALS_TYPE,
        signin_url: state.signin_url(),
        callback_url: state.callback_url(),
    };

    Json(BTreeMap::from([(summary.id.clone(), summary)]))
}

/// GET {base}/signin
/// Renders the login form from the provider's field metadata.
pub async fn signin<A: CredentialsAuthorizer>(
    State(state): State<AppState<A>>,
) -> Result<impl IntoResponse, ApiError> {
    let html = signin_page::render(&state.provider, &state.callback_url())?;
    Ok(Html(html))
}

#[derive(serde::Serialize)]
struct SignInResponse {
    user: UserProfile,
    token: String,
    expires: String,
}

/// POST {base}/callback/{provider}
/// Form login. Only the configured credentials provider is accepted.
pub async fn callback<A: CredentialsAuthorizer>(
    State(state): State<AppState<A>>,
    Path(provider_id): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    form: Result<Form<CredentialsForm>, FormRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let provider = &state.provider;
    if provider_id != provider.id() {
        warn!(provider = %provider_id, "Sign-in for unknown provider");
        return Err(ApiError::from(AuthError::UnknownProvider(provider_id)));
    }

    // An unreadable body counts as absent credentials.
    let credentials = match form {
        Ok(Form(form)) => Credentials::try_from(form).inspect_err(|_| {
            warn!(provider = %provider_id, "Sign-in with missing credential fields");
        }),
        Err(rejection) => {
            warn!(provider = %provider_id, %rejection, "Sign-in with unreadable form");
            Err(AuthError::Missing)
        }
    }?;
    let request = request_context(&method, &uri, &headers);

    let Some(user) = provider
        .authorizer()
        .authorize(&credentials, &request)
        .await?
    else {
        warn!(provider = %provider_id, "Sign-in rejected");
        return Err(ApiError::from(AuthError::Rejected));
    };

    let SessionToken { token, expires } = state.jwt.mint(&user, state.session_max_age)?;
    info!(provider = %provider_id, user = user.id, "Sign-in succeeded");

    Ok(Json(SignInResponse {
        user,
        token,
        expires,
    }))
}

/// GET {base}/session
pub async fn session(MaybeSession(session): MaybeSession) -> Response {
    match session {
        Some(session) => Json(session).into_response(),
        None => Json(serde_json::json!({})).into_response(),
    }
}
