//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared catalog snapshot and the queries handlers call
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: query-string parsing and validation
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use storefront_catalog::Catalog;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Generates the demo catalog described by `config`.
pub fn build_app(config: &ApiConfig) -> Router {
    let catalog = Catalog::mock(config.catalog_size, config.catalog_seed);
    tracing::info!(
        products = catalog.len(),
        seed = config.catalog_seed,
        "catalog snapshot loaded"
    );
    build_app_with_catalog(Arc::new(catalog), config.cors_origin.clone())
}

/// Build the router around an existing catalog snapshot.
pub fn build_app_with_catalog(
    catalog: Arc<Catalog>,
    cors_origin: Option<axum::http::HeaderValue>,
) -> Router {
    let services = Arc::new(services::AppServices::new(catalog));

    let cors = CorsLayer::new()
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any)
        .allow_origin(match cors_origin {
            Some(origin) => AllowOrigin::exact(origin),
            None => AllowOrigin::from(Any),
        });

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .fallback(routes::system::not_found)
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(middleware::make_request_span))
                .layer(cors),
        )
}
