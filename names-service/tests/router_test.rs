mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{ar_rahman, test_router, test_router_with};
use names_service::config::NamesConfig;
use tower::ServiceExt;

#[tokio::test]
async fn responses_carry_request_id() {
    let (router, _) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/health-check")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let (router, _) = test_router();

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn api_routes_get_strict_security_headers() {
    let (router, _) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/names-of-allah")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let (router, _) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/add-name")
                .header(header::ORIGIN, "https://example.org")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let (router, store) = test_router();

    let mut body = ar_rahman();
    body["briefMeaning"] = serde_json::Value::String("x".repeat(3 * 1024 * 1024));

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/add-name")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(store.is_empty());
}

#[tokio::test]
async fn configured_body_limit_above_default_is_honoured() {
    let mut config = NamesConfig::local("mongodb://unused", "names_test");
    config.security.body_limit_bytes = 8 * 1024 * 1024;
    let (router, store) = test_router_with(config);

    // Unknown fields are ignored, so the payload stays valid while exceeding 2 MB
    let mut body = ar_rahman();
    body["padding"] = serde_json::Value::String("x".repeat(3 * 1024 * 1024));

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/add-name")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn add_name_through_router() {
    let (router, store) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/add-name")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&ar_rahman()).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.len(), 1);
}
