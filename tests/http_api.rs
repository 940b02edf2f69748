//! Integration tests for the HTTP boundary

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use pagebar::fonts::FontStore;
use pagebar::server::{router, ServerState};

fn test_app() -> Router {
    router(ServerState::new(FontStore::resolve()))
}

async fn get(app: Router, uri: &str) -> http::Response<axum::body::Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: http::Response<axum::body::Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_healthy() {
    let response = get(test_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn root_lists_endpoints() {
    let response = get(test_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["endpoints"]["health"], "/health");
    assert_eq!(json["endpoints"]["generate_image"], "/pagination/{page_number}");
}

#[tokio::test]
async fn pagination_returns_png_attachment() {
    let response = get(test_app(), "/pagination/7").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=page_7.png"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn page_zero_is_a_bad_request() {
    let response = get(test_app(), "/pagination/0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(
        json["detail"]
            .as_str()
            .unwrap()
            .contains("greater than 0"),
        "{json}"
    );
}

#[tokio::test]
async fn negative_page_is_a_bad_request() {
    let response = get(test_app(), "/pagination/-3").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["detail"].as_str().unwrap().contains("-3"), "{json}");
}

#[tokio::test]
async fn non_integer_page_is_a_bad_request() {
    let response = get(test_app(), "/pagination/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(
        json["detail"].as_str().unwrap().contains("Invalid page number"),
        "{json}"
    );
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = get(test_app(), "/pagination").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
