use axum::response::Response;
use serde_json::Value;

use crate::workflows::qualification::domain::{
    ApplicantProfile, LoanApplication, LoanPurpose, LoanTerm, RiskBand,
};
use crate::workflows::qualification::presets;
use crate::workflows::qualification::remote::{
    RemoteAssessment, RemoteDecision, RemoteScorer, RemoteScoringError, RemoteStageOne,
    RemoteStageTwo,
};

/// Baseline profile with the risk inputs under test; the remaining fields
/// stay neutral.
pub(super) fn profile(dti: f64, utilization: f64, delinquencies: u32, fico: u16) -> ApplicantProfile {
    ApplicantProfile {
        loan_amount: 10_000.0,
        term: LoanTerm::Months36,
        purpose: LoanPurpose::DebtConsolidation,
        annual_income: 50_000.0,
        emp_length: 2.0,
        dti,
        utilization,
        delinquencies,
        fico,
    }
}

pub(super) fn prime_application() -> LoanApplication {
    presets::sample_by_name("Prime").expect("prime sample exists")
}

pub(super) fn edge_application() -> LoanApplication {
    presets::sample_by_name("Edge Case").expect("edge sample exists")
}

pub(super) fn remote_assessment(
    accept_fraction: f64,
    decision: RemoteDecision,
    default_fraction: f64,
    risk_band: RiskBand,
) -> RemoteAssessment {
    RemoteAssessment {
        stage1: RemoteStageOne {
            accept_probability: accept_fraction,
            decision,
        },
        stage2: RemoteStageTwo {
            default_probability: default_fraction,
            risk_band,
        },
        explanations: None,
    }
}

/// Delegate stub that always answers with a fixed assessment.
pub(super) struct StaticRemote(pub(super) RemoteAssessment);

impl RemoteScorer for StaticRemote {
    async fn score(
        &self,
        _profile: &ApplicantProfile,
    ) -> Result<RemoteAssessment, RemoteScoringError> {
        Ok(self.0.clone())
    }
}

/// Delegate stub that always fails at the transport layer.
pub(super) struct FailingRemote;

impl RemoteScorer for FailingRemote {
    async fn score(
        &self,
        _profile: &ApplicantProfile,
    ) -> Result<RemoteAssessment, RemoteScoringError> {
        Err(RemoteScoringError::Transport(
            "connection refused".to_string(),
        ))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
