//! Credit qualification workflow: intake, heuristic scoring, explanation
//! text, and the optional remote-scoring delegate with offline fallback.

pub mod domain;
pub mod intake;
pub mod metadata;
pub mod presets;
pub mod remote;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantProfile, CreditDecision, LoanApplication, LoanPurpose, LoanTerm, RiskBand,
    UnsupportedTerm,
};
pub use intake::{IntakeBounds, IntakeGuard, IntakeViolation};
pub use metadata::{FieldCatalog, NumericRange};
pub use presets::{default_application, sample_applications, sample_by_name, SampleApplication};
pub use remote::{
    HttpScoringClient, RemoteAssessment, RemoteDecision, RemoteExplanations, RemoteScorer,
    RemoteScoringError, RemoteStageOne, RemoteStageTwo,
};
pub use router::qualification_router;
pub use scoring::{ScoreReport, ScoringConfig, ScoringEngine};
pub use service::{
    QualificationError, QualificationReport, QualificationService, ScoreSource, DISCLAIMER,
    OFFLINE_ADVISORY,
};
