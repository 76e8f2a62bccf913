use axum::{
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header, request::Parts},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowCredentials, AllowHeaders, AllowOrigin, CorsLayer};

pub const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::HEAD,
    Method::PUT,
    Method::PATCH,
    Method::POST,
    Method::DELETE,
];

/// Cross-origin policy: only allow-listed origins get CORS headers, and only
/// those may send cookies. Requests from other origins still reach the
/// handlers; browsers just won't expose the response to the calling page.
pub fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    let credentialed = allowed_origins.to_vec();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(AllowCredentials::predicate(
            move |origin: &HeaderValue, _parts: &Parts| credentialed.contains(origin),
        ))
}

/// Successful preflights answer 204 No Content rather than the CORS layer's 200.
pub async fn preflight_no_content(req: Request, next: Next) -> Response {
    let is_preflight = req.method() == Method::OPTIONS
        && req.headers().contains_key(header::ORIGIN)
        && req
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);

    let mut response = next.run(req).await;
    if is_preflight && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}
