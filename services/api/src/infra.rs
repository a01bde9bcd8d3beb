use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use credit_qualifier::config::AppConfig;
use credit_qualifier::error::AppError;
use credit_qualifier::workflows::qualification::{
    HttpScoringClient, QualificationService, ScoringConfig,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wire the qualification service from configuration: remote-first when a
/// delegate endpoint is configured, purely local otherwise.
pub(crate) fn build_qualification_service(
    config: &AppConfig,
) -> Result<QualificationService, AppError> {
    match &config.scoring_api {
        Some(api) => {
            let client = HttpScoringClient::from_config(api)?;
            info!(endpoint = client.endpoint(), "remote scoring delegate configured");
            Ok(QualificationService::with_remote(
                ScoringConfig::default(),
                Arc::new(client),
            ))
        }
        None => Ok(QualificationService::local(ScoringConfig::default())),
    }
}
