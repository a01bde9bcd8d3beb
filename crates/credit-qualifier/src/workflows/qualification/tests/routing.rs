use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::qualification::remote::HttpScoringClient;
use crate::workflows::qualification::router::{self, qualification_router};
use crate::workflows::qualification::scoring::ScoringConfig;
use crate::workflows::qualification::service::QualificationService;

fn local_service() -> Arc<QualificationService> {
    Arc::new(QualificationService::local(ScoringConfig::default()))
}

#[tokio::test]
async fn qualify_handler_returns_a_report() {
    let response = router::qualify_handler::<HttpScoringClient>(
        State(local_service()),
        Json(prime_application()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["assessment"]["decision"], "Approve");
    assert_eq!(payload["source"], "local");
}

#[tokio::test]
async fn qualify_route_accepts_payloads() {
    let router = qualification_router(local_service());

    let response = router
        .oneshot(
            axum::http::Request::post("/api/qualify")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&prime_application()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["assessment"]["risk_band"], "Medium");
    assert_eq!(payload["assessment"]["apr_range"], "12% - 17%");
    assert!(payload["advisory"].is_null());
}

#[tokio::test]
async fn qualify_route_rejects_unsupported_terms() {
    let router = qualification_router(local_service());
    let mut submission = prime_application();
    submission.term = 48;

    let response = router
        .oneshot(
            axum::http::Request::post("/api/qualify")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&submission).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let message = payload["error"].as_str().expect("error message present");
    assert!(message.contains("term"));
}

#[tokio::test]
async fn metadata_route_lists_the_field_catalog() {
    let router = qualification_router(local_service());

    let response = router
        .oneshot(
            axum::http::Request::get("/api/metadata")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["purposes"].as_array().map(|p| p.len()), Some(5));
    assert_eq!(payload["terms"], serde_json::json!([36, 60]));
    assert_eq!(payload["fico"]["min"], 300.0);
}
