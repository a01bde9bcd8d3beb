use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::LoanApplication;
use super::metadata::FieldCatalog;
use super::remote::RemoteScorer;
use super::service::{QualificationError, QualificationService};

/// Router builder exposing the qualification endpoints.
pub fn qualification_router<S>(service: Arc<QualificationService<S>>) -> Router
where
    S: RemoteScorer + 'static,
{
    Router::new()
        .route("/api/qualify", post(qualify_handler::<S>))
        .route("/api/metadata", get(metadata_handler))
        .with_state(service)
}

pub(crate) async fn qualify_handler<S>(
    State(service): State<Arc<QualificationService<S>>>,
    Json(application): Json<LoanApplication>,
) -> Response
where
    S: RemoteScorer + 'static,
{
    match service.qualify(application).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(QualificationError::Intake(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn metadata_handler() -> Json<FieldCatalog> {
    Json(FieldCatalog::standard())
}
