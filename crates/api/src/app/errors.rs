use axum::http::StatusCode;
use axum::response::IntoResponse;

use storefront_catalog::ApiResponse;
use storefront_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match &err {
        DomainError::Validation(_) | DomainError::InvalidId(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::InvalidState(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    tracing::debug!(%status, error = %err, "request rejected");
    json_error(status, err.to_string())
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(ApiResponse::<()>::failure(message))).into_response()
}

pub fn json_ok<T: serde::Serialize>(data: T) -> axum::response::Response {
    (StatusCode::OK, axum::Json(ApiResponse::ok(data))).into_response()
}
