use serde::{Deserialize, Serialize};

/// Policy thresholds for turning raw stage probabilities into decisions
/// and risk bands. Formula weights live with the rules; only the cut-offs
/// are dialed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Acceptance probability above which an application is approved.
    pub approve_above: f64,
    /// Acceptance probability below which an application is declined.
    pub decline_below: f64,
    /// Delinquency count above which an application is declined outright.
    pub max_delinquencies: u32,
    /// Acceptance probability an applicant must exceed before the default
    /// risk stage runs at all (accept-then-price).
    pub pricing_gate: f64,
    /// Default probability below which the Low band applies.
    pub low_band_below: f64,
    /// Default probability below which the Medium band applies.
    pub medium_band_below: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            approve_above: 75.0,
            decline_below: 30.0,
            max_delinquencies: 3,
            pricing_gate: 20.0,
            low_band_below: 15.0,
            medium_band_below: 35.0,
        }
    }
}
