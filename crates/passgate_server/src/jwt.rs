use passgate_core::prelude::*;

use chrono::{DateTime, SecondsFormat, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: u64,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub image: String,
}

impl Claims {
    fn into_session(self) -> Result<Session, AuthError> {
        Ok(Session {
            expires: rfc3339(self.exp)?,
            user: UserProfile {
                id: self.id,
                name: self.name,
                email: self.email,
                image: self.image,
            },
        })
    }
}

/// The logged-in state reconstructed from a token. Never stored server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserProfile,
    /// RFC3339 timestamp, e.g. "2026-01-01T01:00:00Z".
    pub expires: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionToken {
    pub token: String,
    pub expires: String,
}

fn rfc3339(exp: u64) -> Result<String, AuthError> {
    let secs = i64::try_from(exp).map_err(|e| AuthError::System(e.to_string()))?;
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .ok_or_else(|| AuthError::System(format!("expiry out of range: {exp}")))
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// - `secret`: The secret used to sign session tokens.
    ///
    /// **NOTE:** This should be set to a secure value!
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn mint(&self, user: &UserProfile, duration_seconds: u64) -> Result<SessionToken, AuthError> {
        let expiration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AuthError::System(e.to_string()))?
            .as_secs()
            .checked_add(duration_seconds)
            .ok_or_else(|| {
                AuthError::System(format!("session lifetime too large: {duration_seconds}s"))
            })?;

        let claims = Claims {
            sub: user.id.to_string(),
            exp: expiration,
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            image: user.image.clone(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::System(e.to_string()))?;

        Ok(SessionToken {
            token,
            expires: rfc3339(expiration)?,
        })
    }

    pub fn verify(&self, token: &str) -> Result<Session, AuthError> {
        if token.is_empty() {
            return Err(AuthError::Missing);
        }

        let validation = Validation::default();
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|err| {
                match err.kind() {
                    ErrorKind::ExpiredSignature => AuthError::Expired,
                    _ => AuthError::Invalid,
                }
            })?;

        token_data.claims.into_session()
    }
}
