use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::domain::{ApplicantProfile, CreditDecision, RiskBand};
use super::scoring::ScoreReport;
use crate::config::ScoringApiConfig;

const REMOTE_DRIVER_LIMIT: usize = 3;
const REMOTE_SUGGESTION_LIMIT: usize = 2;

/// Seam over the external scoring endpoint so the service (and its tests)
/// can swap transports.
pub trait RemoteScorer: Send + Sync {
    fn score(
        &self,
        profile: &ApplicantProfile,
    ) -> impl Future<Output = Result<RemoteAssessment, RemoteScoringError>> + Send;
}

/// Error raised when the delegate cannot produce an assessment.
#[derive(Debug, thiserror::Error)]
pub enum RemoteScoringError {
    #[error("scoring request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for RemoteScoringError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

/// Stage 1 payload returned by the delegate. Probabilities arrive as
/// fractions in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteStageOne {
    pub accept_probability: f64,
    pub decision: RemoteDecision,
}

/// The delegate only ever approves or refers; declines stay a local
/// policy concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteDecision {
    Approve,
    Refer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteStageTwo {
    pub default_probability: f64,
    pub risk_band: RiskBand,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteExplanations {
    #[serde(default)]
    pub drivers: Option<Vec<String>>,
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
}

/// Structured response from the delegate's qualify endpoint. Unknown
/// fields (thresholds, echoed inputs, disclaimers) are tolerated and
/// dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteAssessment {
    pub stage1: RemoteStageOne,
    pub stage2: RemoteStageTwo,
    #[serde(default)]
    pub explanations: Option<RemoteExplanations>,
}

impl RemoteAssessment {
    /// Adopt a delegate assessment as a score report, scaling fractional
    /// probabilities to percent and borrowing explanation text from the
    /// local report when the delegate omitted it.
    pub(crate) fn into_score_report(self, local: &ScoreReport) -> ScoreReport {
        let decision = match self.stage1.decision {
            RemoteDecision::Approve => CreditDecision::Approve,
            RemoteDecision::Refer => CreditDecision::Refer,
        };
        let risk_band = self.stage2.risk_band;

        let explanations = self.explanations.unwrap_or_default();
        let drivers = match explanations.drivers {
            Some(mut drivers) => {
                drivers.truncate(REMOTE_DRIVER_LIMIT);
                drivers
            }
            None => local.drivers.clone(),
        };
        let suggestions = match explanations.suggestions {
            Some(mut suggestions) => {
                suggestions.truncate(REMOTE_SUGGESTION_LIMIT);
                suggestions
            }
            None => local.suggestions.clone(),
        };

        ScoreReport {
            accept_probability: self.stage1.accept_probability * 100.0,
            default_probability: self.stage2.default_probability * 100.0,
            decision,
            risk_band,
            apr_range: risk_band.apr_range().to_string(),
            drivers,
            suggestions,
        }
    }
}

/// HTTP client for the delegate, with a bounded per-request timeout so a
/// slow upstream degrades into the offline fallback instead of stalling
/// the caller.
#[derive(Debug, Clone)]
pub struct HttpScoringClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpScoringClient {
    pub fn from_config(config: &ScoringApiConfig) -> Result<Self, RemoteScoringError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.qualify_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RemoteScorer for HttpScoringClient {
    async fn score(
        &self,
        profile: &ApplicantProfile,
    ) -> Result<RemoteAssessment, RemoteScoringError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(profile)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<RemoteAssessment>().await?)
    }
}
