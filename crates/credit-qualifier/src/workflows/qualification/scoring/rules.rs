use super::super::domain::ApplicantProfile;
use super::config::ScoringConfig;

// Output clamps are part of the heuristic's identity: stage 1 always lands
// in [5, 98] and a computed stage 2 in [2, 95].
const ACCEPT_FLOOR: f64 = 5.0;
const ACCEPT_CEILING: f64 = 98.0;
const DEFAULT_FLOOR: f64 = 2.0;
const DEFAULT_CEILING: f64 = 95.0;

/// Raw two-stage probabilities, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct StageSignals {
    pub accept_probability: f64,
    pub default_probability: f64,
}

pub(crate) fn score_profile(profile: &ApplicantProfile, config: &ScoringConfig) -> StageSignals {
    let accept_probability = acceptance_probability(profile);

    // Applicants filtered out at stage 1 never get a refined risk estimate.
    let default_probability = if accept_probability > config.pricing_gate {
        default_probability(profile)
    } else {
        0.0
    };

    StageSignals {
        accept_probability,
        default_probability,
    }
}

/// Stage 1: start from 100, subtract risk penalties, add the credit-score
/// adjustment (which can be negative), clamp.
fn acceptance_probability(profile: &ApplicantProfile) -> f64 {
    let dti_penalty = if profile.dti > 40.0 {
        40.0
    } else {
        profile.dti * 0.5
    };
    let utilization_penalty = if profile.utilization > 70.0 {
        30.0
    } else {
        profile.utilization * 0.2
    };
    let delinquency_penalty = f64::from(profile.delinquencies) * 15.0;
    let fico_adjustment = (f64::from(profile.fico) - 600.0) / 4.0;

    (100.0 - dti_penalty - utilization_penalty - delinquency_penalty + fico_adjustment)
        .clamp(ACCEPT_FLOOR, ACCEPT_CEILING)
}

/// Stage 2: predicted default probability for applicants that cleared the
/// acceptance gate.
fn default_probability(profile: &ApplicantProfile) -> f64 {
    let score_component = 100.0 - f64::from(profile.fico) / 8.5;
    (score_component + profile.dti / 2.0 + profile.utilization / 3.0)
        .clamp(DEFAULT_FLOOR, DEFAULT_CEILING)
}
