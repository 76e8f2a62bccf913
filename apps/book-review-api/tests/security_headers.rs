use axum::{
    Json, Router,
    http::{HeaderValue, StatusCode, header},
    routing::get,
};
use axum_test::{TestResponse, TestServer};
use book_review_api::{
    Config, application::middleware::security_headers::SECURITY_HEADERS, build_app,
};
use core_lib::ApiResponse;

async fn embeddable_widget() -> ([(header::HeaderName, &'static str); 1], Json<ApiResponse<()>>) {
    (
        [(header::X_FRAME_OPTIONS, "DENY")],
        Json(ApiResponse::ok("Reading list widget")),
    )
}

fn setup_test_app() -> TestServer {
    let routes = Router::new().route("/widgets/reading-list", get(embeddable_widget));
    TestServer::new(build_app(&Config::default(), routes)).expect("Failed to create TestServer")
}

fn assert_hardened(response: &TestResponse) {
    for (name, value) in SECURITY_HEADERS {
        assert_eq!(
            response.headers().get(name),
            Some(&HeaderValue::from_static(value)),
            "missing or wrong {name}"
        );
    }
}

#[tokio::test]
async fn test_welcome_route_is_hardened() {
    let server = setup_test_app();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_hardened(&response);
    assert_eq!(
        response.headers().get(header::X_CONTENT_TYPE_OPTIONS),
        Some(&HeaderValue::from_static("nosniff"))
    );
}

#[tokio::test]
async fn test_error_envelope_is_hardened() {
    let server = setup_test_app();

    let response = server.get("/does-not-exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_hardened(&response);
}

#[tokio::test]
async fn test_handler_set_header_is_not_overwritten() {
    let server = setup_test_app();

    let response = server.get("/widgets/reading-list").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::X_FRAME_OPTIONS),
        Some(&HeaderValue::from_static("DENY"))
    );
    assert_eq!(
        response.headers().get(header::REFERRER_POLICY),
        Some(&HeaderValue::from_static("no-referrer"))
    );
}
