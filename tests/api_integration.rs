//! Integration tests for the HTTP API

use ncsmc_simplify::core::create_router;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;
use serde_json::{json, Value};

const FIXTURE: &str = include_str!("fixtures/nLi8_Nmax6.out");

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_extract_returns_report() {
    let app = create_router();

    let response = app
        .oneshot(post_json("/extract", json!({ "source": "nLi8", "text": FIXTURE })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["source"], "nLi8");
    assert_eq!(json["bound_state_count"], 2);
    assert_eq!(json["summary"]["bound_states"][0]["parity"], "-1");
    assert_eq!(json["summary"]["bound_states"][0]["j"], 1.5);
    assert!(json["generated_at"].is_string());
}

#[tokio::test]
async fn test_extract_rejects_truncated_log() {
    let app = create_router();

    let response = app
        .oneshot(post_json(
            "/extract",
            json!({ "text": "Bound state found at E_b=-1.0\ni_p,p_chan,p_st 1\n" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "E001_UNTERMINATED_STATE");
}

#[tokio::test]
async fn test_simplify_returns_text() {
    let app = create_router();

    let response = app
        .oneshot(post_json("/simplify", json!({ "text": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("Simplified View of request:"));
    assert!(text.contains("no bound states found"));
}
