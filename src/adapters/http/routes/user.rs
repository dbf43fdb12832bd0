use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::adapters::http::{app_state::AppState, extract::CurrentUser};

#[derive(Serialize)]
struct MeResponse {
    username: String,
    email: String,
    roles: Vec<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

async fn me(CurrentUser(user): CurrentUser) -> Json<MeResponse> {
    let roles = user.role_names();
    Json(MeResponse {
        username: user.username,
        email: user.email,
        roles,
    })
}
