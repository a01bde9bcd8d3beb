use super::super::domain::{ApplicantProfile, CreditDecision, RiskBand};
use super::config::ScoringConfig;
use super::rules::StageSignals;

/// Map stage signals to a decision. Decline is evaluated last and
/// overwrites unconditionally, so it outranks Approve whenever both
/// conditions hold.
pub(crate) fn decide(
    signals: &StageSignals,
    profile: &ApplicantProfile,
    config: &ScoringConfig,
) -> CreditDecision {
    let mut decision = CreditDecision::Refer;
    if signals.accept_probability > config.approve_above {
        decision = CreditDecision::Approve;
    }
    if signals.accept_probability < config.decline_below
        || profile.delinquencies > config.max_delinquencies
    {
        decision = CreditDecision::Decline;
    }
    decision
}

pub(crate) fn band_for(default_probability: f64, config: &ScoringConfig) -> RiskBand {
    if default_probability < config.low_band_below {
        RiskBand::Low
    } else if default_probability < config.medium_band_below {
        RiskBand::Medium
    } else {
        RiskBand::High
    }
}
