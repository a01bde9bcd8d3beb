mod config;
mod explain;
mod policy;
mod rules;

pub use config::ScoringConfig;

use super::domain::{ApplicantProfile, CreditDecision, RiskBand};
use serde::{Deserialize, Serialize};

/// Stateless two-stage heuristic scorer.
///
/// `evaluate` is a pure function of the profile: no I/O, no hidden state,
/// and total over its input domain — out-of-range numbers are absorbed by
/// the output clamps rather than rejected.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn evaluate(&self, profile: &ApplicantProfile) -> ScoreReport {
        let signals = rules::score_profile(profile, &self.config);
        let decision = policy::decide(&signals, profile, &self.config);
        let risk_band = policy::band_for(signals.default_probability, &self.config);

        ScoreReport {
            accept_probability: signals.accept_probability,
            default_probability: signals.default_probability,
            decision,
            risk_band,
            apr_range: risk_band.apr_range().to_string(),
            drivers: explain::decision_drivers(profile),
            suggestions: explain::improvement_suggestions(profile),
        }
    }
}

/// Value object describing one evaluation: probabilities in percent, the
/// decision, the risk band with its APR bracket, and presentation-ready
/// explanation strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub accept_probability: f64,
    pub default_probability: f64,
    pub decision: CreditDecision,
    pub risk_band: RiskBand,
    pub apr_range: String,
    pub drivers: Vec<String>,
    pub suggestions: Vec<String>,
}
