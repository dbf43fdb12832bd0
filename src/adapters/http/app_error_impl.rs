use crate::app_error::AppError;
use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

const GENERIC_MESSAGE: &str = "Unexpected error occurred";

/// Error body returned for every failed request.
///
/// `path` is filled in by `error_path_middleware`; a response built outside
/// the app router carries an empty path.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub timestamp: NaiveDateTime,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message,
            path: String::new(),
        }
    }
}

pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::DuplicateUsername | AppError::DuplicateEmail => StatusCode::CONFLICT,
        AppError::InvalidCredentials | AppError::TokenInvalid => StatusCode::UNAUTHORIZED,
        AppError::Validation(_) => StatusCode::BAD_REQUEST,
        AppError::DefaultRoleMissing | AppError::Database(_) | AppError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);

        // Log the error before it gets converted into a status response.
        if status.is_server_error() {
            tracing::error!(error = ?self, code = self.code().as_str(), "Request failed");
        } else {
            tracing::info!(error = %self, code = self.code().as_str(), "Request rejected");
        }

        let message = match self {
            AppError::Database(_) | AppError::Internal(_) => GENERIC_MESSAGE.to_string(),
            other => other.to_string(),
        };

        error_response(status, message)
    }
}

/// Renders the standard error body. The copy in the response extensions lets
/// `error_path_middleware` fill in the request path.
pub fn error_response(status: StatusCode, message: String) -> Response {
    let body = ErrorResponse::new(status, message);
    (status, Extension(body.clone()), Json(body)).into_response()
}
