use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env_default, get_env_opt};
use secrecy::SecretString;
use time::Duration;

use super::InfraError;

/// HS256 needs at least 256 bits of key material.
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Ten years.
pub const MAX_TOKEN_TTL_SECS: i64 = 315_360_000;

pub struct AppConfig {
    pub jwt_secret: SecretString,
    pub token_ttl: Duration,
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    /// Reads the process configuration once at startup. Nothing here is reloadable.
    pub fn from_env() -> Result<Self, InfraError> {
        let jwt_secret = required("JWT_SECRET")?;
        let database_url = required("DATABASE_URL")?;

        let token_ttl_secs: i64 = get_env_default("TOKEN_TTL_SECS", 86_400);
        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 8080)));
        let cors_origin: String =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"));

        Self::new(
            jwt_secret,
            token_ttl_secs,
            database_url,
            database_max_connections,
            bind_addr,
            &cors_origin,
        )
    }

    pub fn new(
        jwt_secret: String,
        token_ttl_secs: i64,
        database_url: String,
        database_max_connections: u32,
        bind_addr: SocketAddr,
        cors_origin: &str,
    ) -> Result<Self, InfraError> {
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(InfraError::ConfigInvalid {
                var: "JWT_SECRET",
                reason: format!("must be at least {MIN_JWT_SECRET_LEN} bytes"),
            });
        }
        if token_ttl_secs <= 0 {
            return Err(InfraError::ConfigInvalid {
                var: "TOKEN_TTL_SECS",
                reason: "must be positive".into(),
            });
        }
        if token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(InfraError::ConfigInvalid {
                var: "TOKEN_TTL_SECS",
                reason: format!("must be at most {MAX_TOKEN_TTL_SECS} seconds"),
            });
        }
        if database_max_connections == 0 {
            return Err(InfraError::ConfigInvalid {
                var: "DATABASE_MAX_CONNECTIONS",
                reason: "must be positive".into(),
            });
        }
        let cors_origin: HeaderValue =
            cors_origin
                .parse()
                .map_err(|_| InfraError::ConfigInvalid {
                    var: "CORS_ORIGIN",
                    reason: "must be a valid header value".into(),
                })?;

        Ok(Self {
            jwt_secret: SecretString::new(jwt_secret.into()),
            token_ttl: Duration::seconds(token_ttl_secs),
            database_url,
            database_max_connections,
            bind_addr,
            cors_origin,
        })
    }
}

// `get_env` panics on a missing variable; startup reports it as an error instead.
fn required(var: &'static str) -> Result<String, InfraError> {
    get_env_opt(var).ok_or(InfraError::ConfigMissing { var })
}
