use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::{jwt::JwtCodec, password},
    domain::entities::{
        role::{Role, RoleName},
        user::{NewUser, User},
    },
};

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn exists_by_username(&self, username: &str) -> AppResult<bool>;
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    /// Persists a new identity. A uniqueness violation in the store must come
    /// back as `DuplicateUsername` or `DuplicateEmail`.
    async fn save(&self, user: NewUser) -> AppResult<User>;
}

#[async_trait]
pub trait RoleRepo: Send + Sync {
    async fn find_by_name(&self, name: RoleName) -> AppResult<Option<Role>>;
    /// Idempotent insert, only used by the startup seed.
    async fn ensure_exists(&self, name: RoleName) -> AppResult<Role>;
}

/// Verified against when the username is unknown, so both login failures
/// cost one Argon2 verification.
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| password::hash_password("unknown-user-placeholder").ok());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResult {
    pub token: String,
    pub username: String,
    pub email: String,
}

#[derive(Clone)]
pub struct AuthUseCases {
    user_repo: Arc<dyn UserRepo>,
    role_repo: Arc<dyn RoleRepo>,
    tokens: Arc<JwtCodec>,
}

impl AuthUseCases {
    pub fn new(
        user_repo: Arc<dyn UserRepo>,
        role_repo: Arc<dyn RoleRepo>,
        tokens: Arc<JwtCodec>,
    ) -> Self {
        Self {
            user_repo,
            role_repo,
            tokens,
        }
    }

    /// Checks run in a fixed order: username, then email, then default role.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<AuthResult> {
        if self.user_repo.exists_by_username(username).await? {
            return Err(AppError::DuplicateUsername);
        }

        if self.user_repo.exists_by_email(email).await? {
            return Err(AppError::DuplicateEmail);
        }

        let default_role = match self.role_repo.find_by_name(RoleName::DEFAULT).await? {
            Some(role) => role,
            None => {
                tracing::error!(
                    role = %RoleName::DEFAULT,
                    "Default role is not seeded, registration is unavailable"
                );
                return Err(AppError::DefaultRoleMissing);
            }
        };

        let password_hash = hash_blocking(password.to_owned()).await?;

        let user = self
            .user_repo
            .save(NewUser {
                username: username.to_owned(),
                email: email.to_owned(),
                password_hash,
                roles: vec![default_role],
            })
            .await?;

        tracing::info!(user_id = %user.id, "Registered new user");

        let token = self.tokens.issue(&user.username)?;
        Ok(AuthResult {
            token,
            username: user.username,
            email: user.email,
        })
    }

    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AuthResult> {
        let Some(user) = self.user_repo.find_by_username(username).await? else {
            if let Some(hash) = DUMMY_HASH.as_ref() {
                let _ = verify_blocking(password.to_owned(), hash.clone()).await;
            }
            return Err(AppError::InvalidCredentials);
        };

        if !verify_blocking(password.to_owned(), user.password_hash.clone()).await? {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.username)?;
        Ok(AuthResult {
            token,
            username: user.username,
            email: user.email,
        })
    }

    /// Resolves a bearer token to the identity it was issued for.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> AppResult<User> {
        let username = self.tokens.verify(token)?;
        self.user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AppError::TokenInvalid)
    }
}

// Argon2 is deliberately slow; keep it off the async workers.
async fn hash_blocking(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || password::hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
}

async fn verify_blocking(password: String, hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || password::verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
}
