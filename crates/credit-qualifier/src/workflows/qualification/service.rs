use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::LoanApplication;
use super::intake::{IntakeGuard, IntakeViolation};
use super::remote::{HttpScoringClient, RemoteScorer};
use super::scoring::{ScoreReport, ScoringConfig, ScoringEngine};

/// Fixed notice attached to every report.
pub const DISCLAIMER: &str = "Educational demo. No PII collected. Not financial advice.";

/// Advisory surfaced when the delegate is configured but unreachable.
pub const OFFLINE_ADVISORY: &str = "API not available. Using offline demo mode.";

/// Where a report's numbers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    Remote,
    Local,
}

impl ScoreSource {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreSource::Remote => "remote",
            ScoreSource::Local => "local",
        }
    }
}

/// Full qualification outcome handed to callers and serialized over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationReport {
    pub assessment: ScoreReport,
    pub source: ScoreSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
    pub evaluated_at: DateTime<Utc>,
    pub disclaimer: String,
}

/// Error raised by the qualification service. Delegate failures are
/// absorbed by the offline fallback and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum QualificationError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
}

/// Service facade composing the intake guard, the local engine, and the
/// optional remote delegate.
pub struct QualificationService<S = HttpScoringClient> {
    guard: IntakeGuard,
    engine: ScoringEngine,
    remote: Option<Arc<S>>,
}

impl QualificationService {
    /// Service backed purely by the built-in heuristic.
    pub fn local(config: ScoringConfig) -> Self {
        Self {
            guard: IntakeGuard::default(),
            engine: ScoringEngine::new(config),
            remote: None,
        }
    }
}

impl<S> QualificationService<S>
where
    S: RemoteScorer + 'static,
{
    /// Service that prefers the remote delegate and falls back to the
    /// local heuristic when it is unavailable.
    pub fn with_remote(config: ScoringConfig, remote: Arc<S>) -> Self {
        Self {
            guard: IntakeGuard::default(),
            engine: ScoringEngine::new(config),
            remote: Some(remote),
        }
    }

    /// Sanitize and evaluate one application.
    ///
    /// The local report is always computed; when a delegate is configured
    /// its assessment is adopted on success, otherwise the local numbers
    /// ship with an offline advisory.
    pub async fn qualify(
        &self,
        application: LoanApplication,
    ) -> Result<QualificationReport, QualificationError> {
        let profile = self.guard.profile_from_submission(application)?;
        let local = self.engine.evaluate(&profile);

        let (assessment, source, advisory) = match &self.remote {
            None => (local, ScoreSource::Local, None),
            Some(remote) => match remote.score(&profile).await {
                Ok(remote_assessment) => (
                    remote_assessment.into_score_report(&local),
                    ScoreSource::Remote,
                    None,
                ),
                Err(err) => {
                    warn!(error = %err, "scoring delegate unavailable, using local heuristic");
                    (local, ScoreSource::Local, Some(OFFLINE_ADVISORY.to_string()))
                }
            },
        };

        info!(
            decision = assessment.decision.label(),
            risk_band = assessment.risk_band.label(),
            source = source.label(),
            "application qualified"
        );

        Ok(QualificationReport {
            assessment,
            source,
            advisory,
            evaluated_at: Utc::now(),
            disclaimer: DISCLAIMER.to_string(),
        })
    }
}
