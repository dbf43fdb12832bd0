use axum::Router;

use crate::adapters::http::app_state::AppState;

pub mod auth;
pub mod user;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", user::router())
}
