use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{Method, Uri},
    middleware,
    routing::get,
};
use core_lib::{ApiResponse, CoreError};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub mod application;
pub mod config;
pub mod telemetry;

#[cfg(test)]
mod test_support;

use application::{
    ApiError,
    error::handle_panic,
    extract::JSON_BODY_LIMIT_BYTES,
    middleware::{cors_layer, preflight_no_content, with_security_headers},
};
pub use config::{Config, ConfigError, Environment};

pub const WELCOME_MESSAGE: &str = "Welcome to Book Review App";

/// Router with the welcome route only.
pub fn create_app(config: &Config) -> Router {
    build_app(config, Router::new())
}

/// Mounts `routes` next to the welcome route and wraps everything in the
/// shared middleware stack. Anything a route returns as an error, including
/// panics and unmatched paths, leaves as the JSON error envelope.
pub fn build_app(config: &Config, routes: Router) -> Router {
    let router = Router::new()
        .route("/", get(welcome))
        .merge(routes)
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(DefaultBodyLimit::max(JSON_BODY_LIMIT_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(middleware::from_fn(preflight_no_content));

    with_security_headers(router).layer(TraceLayer::new_for_http())
}

// GET /
pub async fn welcome() -> Json<ApiResponse<()>> {
    Json(ApiResponse::ok(WELCOME_MESSAGE))
}

pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    CoreError::not_found(format!("Cannot {} {}", method, uri.path())).into()
}
