use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;
use validator::Validate;

use crate::{
    adapters::http::{app_state::AppState, extract::ValidatedJson},
    app_error::AppResult,
    application::validators::{not_blank, required_email},
    use_cases::auth::AuthResult,
};

// Absent fields deserialize as empty and are reported by the blank checks.
#[derive(Deserialize, Validate, Default)]
#[serde(default)]
struct RegisterRequest {
    #[validate(custom(function = "not_blank", message = "Username is mandatory"))]
    username: String,
    #[validate(custom(function = "required_email"))]
    email: String,
    #[validate(custom(function = "not_blank", message = "Password is mandatory"))]
    password: String,
}

#[derive(Deserialize, Validate, Default)]
#[serde(default)]
struct LoginRequest {
    #[validate(custom(function = "not_blank", message = "Username is mandatory"))]
    username: String,
    #[validate(custom(function = "not_blank", message = "Password is mandatory"))]
    password: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

async fn register(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Json<AuthResult>> {
    // Identifiers are stored trimmed so padded variants collide with the originals.
    let username = payload.username.trim();
    let email = payload.email.trim();

    let result = app_state
        .auth_use_cases
        .register(username, email, &payload.password)
        .await?;
    Ok(Json(result))
}

async fn login(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AuthResult>> {
    let username = payload.username.trim();

    let result = app_state
        .auth_use_cases
        .login(username, &payload.password)
        .await?;
    Ok(Json(result))
}
