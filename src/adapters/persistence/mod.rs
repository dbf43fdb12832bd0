use sqlx::PgPool;

use crate::app_error::AppError;

pub mod role;
pub mod user;

/// Unique constraint names from `migrations/`. A violation of either one is
/// the authoritative duplicate signal when two registrations race.
pub const USERS_USERNAME_KEY: &str = "users_username_key";
pub const USERS_EMAIL_KEY: &str = "users_email_key";

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }
}

/// Maps a violated unique constraint to the matching duplicate kind.
pub fn duplicate_for_constraint(constraint: Option<&str>) -> Option<AppError> {
    match constraint? {
        USERS_USERNAME_KEY => Some(AppError::DuplicateUsername),
        USERS_EMAIL_KEY => Some(AppError::DuplicateEmail),
        _ => None,
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
            && let Some(duplicate) = duplicate_for_constraint(db_err.constraint())
        {
            return duplicate;
        }

        // Log the actual error for debugging, but don't expose details
        tracing::error!(error = ?err, "Database error");
        AppError::Database("Database operation failed".into())
    }
}
