use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request, rejection::JsonRejection},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{
    adapters::http::{app_error_impl::error_response, app_state::AppState},
    app_error::AppError,
    application::validators::join_messages,
    domain::entities::user::User,
};

/// JSON body that has passed its `validator` rules. Malformed JSON, a missing
/// JSON content type and rule violations are rejected as `AppError::Validation`.
/// Other body failures (e.g. over the size limit) keep their own status.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_response)?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(join_messages(&errors)).into_response())?;

        Ok(ValidatedJson(value))
    }
}

fn json_rejection_response(rejection: JsonRejection) -> Response {
    match rejection {
        JsonRejection::JsonDataError(_)
        | JsonRejection::JsonSyntaxError(_)
        | JsonRejection::MissingJsonContentType(_) => {
            AppError::Validation(rejection.body_text()).into_response()
        }
        other => {
            tracing::info!(status = %other.status(), error = %other.body_text(), "Request body rejected");
            error_response(other.status(), other.body_text())
        }
    }
}

/// The identity behind a valid `Authorization: Bearer` token.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::TokenInvalid)?;

        let user = state.auth_use_cases.authenticate(bearer.token()).await?;
        Ok(CurrentUser(user))
    }
}
