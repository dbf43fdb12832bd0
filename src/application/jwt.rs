use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::app_error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

pub fn issue(subject: &str, secret: &SecretString, ttl: Duration) -> AppResult<String> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let exp = now
        .checked_add(ttl.whole_seconds())
        .ok_or_else(|| AppError::Internal("Token lifetime overflows expiry".into()))?;
    let claims = Claims {
        sub: subject.to_string(),
        iat: now,
        exp,
    };
    let header = Header::new(Algorithm::HS256);
    encode(
        &header,
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.to_string()))
}

/// Verifies signature and expiry. Every failure collapses into `TokenInvalid`;
/// the underlying reason is only logged.
pub fn verify(token: &str, secret: &SecretString) -> AppResult<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "Token rejected");
        AppError::TokenInvalid
    })?;

    // jsonwebtoken accepts exp == now; a token is only valid while exp is in the future.
    if claims.exp <= OffsetDateTime::now_utc().unix_timestamp() {
        tracing::debug!(exp = claims.exp, "Token rejected: expired");
        return Err(AppError::TokenInvalid);
    }

    Ok(claims)
}

/// Signing key and token lifetime, built once at startup and shared read-only.
#[derive(Debug)]
pub struct JwtCodec {
    secret: SecretString,
    ttl: Duration,
}

impl JwtCodec {
    pub fn new(secret: SecretString, ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    pub fn issue(&self, subject: &str) -> AppResult<String> {
        issue(subject, &self.secret, self.ttl)
    }

    /// Returns the subject of a valid token.
    pub fn verify(&self, token: &str) -> AppResult<String> {
        verify(token, &self.secret).map(|claims| claims.sub)
    }
}
