//! Integration specifications for the credit qualification workflow.
//!
//! Scenarios exercise end-to-end behavior through the public service
//! facade and HTTP router so intake, scoring, fallback, and routing are
//! validated without reaching into private modules.

use std::sync::Arc;

use axum::http::StatusCode;
use tower::ServiceExt;

use credit_qualifier::workflows::qualification::{
    qualification_router, sample_by_name, ApplicantProfile, CreditDecision, QualificationService,
    RemoteAssessment, RemoteScorer, RemoteScoringError, ScoreSource, ScoringConfig,
    OFFLINE_ADVISORY,
};

struct UnreachableDelegate;

impl RemoteScorer for UnreachableDelegate {
    async fn score(
        &self,
        _profile: &ApplicantProfile,
    ) -> Result<RemoteAssessment, RemoteScoringError> {
        Err(RemoteScoringError::Transport("timed out".to_string()))
    }
}

async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[tokio::test]
async fn prime_applicant_is_approved_over_http() {
    let service = Arc::new(QualificationService::local(ScoringConfig::default()));
    let router = qualification_router(service);

    let submission = sample_by_name("Prime").expect("prime sample exists");
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

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["assessment"]["decision"], "Approve");
    assert_eq!(payload["assessment"]["accept_probability"], 98.0);
    assert_eq!(payload["source"], "local");
    assert!(payload["evaluated_at"].is_string());
    assert!(payload["disclaimer"].as_str().unwrap().contains("Educational"));
}

#[tokio::test]
async fn edge_case_applicant_is_declined() {
    let service = QualificationService::local(ScoringConfig::default());
    let submission = sample_by_name("Edge Case").expect("edge sample exists");

    let report = service
        .qualify(submission)
        .await
        .expect("edge sample qualifies");

    assert_eq!(report.assessment.decision, CreditDecision::Decline);
    assert_eq!(report.assessment.default_probability, 0.0);
}

#[tokio::test]
async fn unreachable_delegate_degrades_to_offline_mode() {
    let service = Arc::new(QualificationService::with_remote(
        ScoringConfig::default(),
        Arc::new(UnreachableDelegate),
    ));
    let router = qualification_router(service);

    let submission = sample_by_name("Near-prime").expect("near-prime sample exists");
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

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["source"], "local");
    assert_eq!(payload["advisory"], OFFLINE_ADVISORY);
}

#[tokio::test]
async fn malformed_submissions_are_rejected() {
    let service = Arc::new(QualificationService::local(ScoringConfig::default()));
    let router = qualification_router(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/qualify")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(r#"{"loan_amount": 1000}"#))
                .unwrap(),
        )
        .await
        .expect("route executes");

    // Missing fields never reach the intake guard; axum rejects them at
    // deserialization.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
