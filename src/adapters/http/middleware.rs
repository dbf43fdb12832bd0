use axum::{
    Json,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::app_error_impl::ErrorResponse;

/// Stamps the request path onto error bodies produced by `AppError`.
pub async fn error_path_middleware(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<ErrorResponse>() {
        Some(body) => {
            let status = response.status();
            (status, Json(ErrorResponse { path, ..body })).into_response()
        }
        None => response,
    }
}
