use crate::api::ApiError;
use crate::jwt::Session;
use crate::state::AppState;

use axum::{extract::FromRequestParts, http::request::Parts};
use passgate_core::prelude::*;

/// The session attached to a request, if it carries a bearer token.
///
/// A missing `Authorization` header yields `None`. A present but bad token is rejected.
#[derive(Clone, Debug)]
pub struct MaybeSession(pub Option<Session>);

impl<A> FromRequestParts<AppState<A>> for MaybeSession
where
    A: CredentialsAuthorizer,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<A>,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(axum::http::header::AUTHORIZATION) else {
            return Ok(MaybeSession(None));
        };

        let token = header
            .to_str()
            .map(|header_str| {
                header_str
                    .strip_prefix("Bearer ")
                    .unwrap_or(header_str)
                    .trim()
            })
            .map_err(|_| AuthError::Invalid)?;

        let session = state.jwt.verify(token)?;
        Ok(MaybeSession(Some(session)))
    }
}
