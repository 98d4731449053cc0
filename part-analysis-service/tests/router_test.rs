mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::test_config;
use http_body_util::BodyExt;
use part_analysis_service::services::providers::mock::MockVisionProvider;
use part_analysis_service::startup::{build_router, AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

fn state(provider: Arc<MockVisionProvider>) -> AppState {
    AppState {
        config: Arc::new(test_config(&[])),
        provider,
    }
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn json_body_is_rejected_as_missing_image() {
    let provider = Arc::new(MockVisionProvider::responding("unused"));
    let app = build_router(state(provider.clone()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"brand":"Toyota"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, r#"{"error":"Image not uploaded."}"#);
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn hand_built_multipart_reaches_provider() {
    let provider = Arc::new(MockVisionProvider::responding("tamam"));
    let app = build_router(state(provider.clone()));

    let body = concat!(
        "--XBOUNDARY\r\n",
        "Content-Disposition: form-data; name=\"brand\"\r\n\r\n",
        "Fiat\r\n",
        "--XBOUNDARY\r\n",
        "Content-Disposition: form-data; name=\"image\"; filename=\"p.png\"\r\n",
        "Content-Type: image/png\r\n\r\n",
        "PNGDATA\r\n",
        "--XBOUNDARY--\r\n",
    );
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header(header::CONTENT_TYPE, "multipart/form-data; boundary=XBOUNDARY")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, r#"{"result":"tamam"}"#);

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].prompt.contains("- Brand: Fiat\n"));
    assert_eq!(calls[0].mime_type, "image/png");
    assert_eq!(calls[0].image, b"PNGDATA");
}

#[tokio::test]
async fn unknown_route_falls_back_to_assets() {
    let provider = Arc::new(MockVisionProvider::responding("unused"));
    let app = build_router(state(provider));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/does-not-exist.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
