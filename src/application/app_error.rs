use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Username is already taken")]
    DuplicateUsername,

    #[error("Email is already in use")]
    DuplicateEmail,

    /// The default role was never seeded. A deployment defect, not a client error.
    #[error("Default role not found")]
    DefaultRoleMissing,

    // Shared by unknown-user and wrong-password so callers cannot tell them apart.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    TokenInvalid,

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::DuplicateUsername => ErrorCode::DuplicateUsername,
            AppError::DuplicateEmail => ErrorCode::DuplicateEmail,
            AppError::DefaultRoleMissing => ErrorCode::DefaultRoleMissing,
            AppError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AppError::TokenInvalid => ErrorCode::TokenInvalid,
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    DuplicateUsername,
    DuplicateEmail,
    DefaultRoleMissing,
    InvalidCredentials,
    TokenInvalid,
    ValidationError,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DuplicateUsername => "DUPLICATE_USERNAME",
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::DefaultRoleMissing => "DEFAULT_ROLE_MISSING",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::TokenInvalid => "TOKEN_INVALID",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
