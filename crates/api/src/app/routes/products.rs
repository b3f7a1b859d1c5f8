use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::StatusCode,
    routing::get,
    Router,
};

use storefront_catalog::PRODUCT_NOT_FOUND;
use storefront_core::DomainError;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<dto::ListProductsParams>, QueryRejection>,
) -> axum::response::Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.body_text()),
    };

    let query = match params.parse() {
        Ok(q) => q,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.products_list(&query) {
        Ok(page) => errors::json_ok(page),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.products_get(&id) {
        Ok(product) => errors::json_ok(product),
        Err(DomainError::NotFound) => errors::json_error(StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND),
        Err(e) => errors::domain_error_to_response(e),
    }
}
