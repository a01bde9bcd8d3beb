use serde::{Deserialize, Serialize};

/// Raw applicant submission as collected by a form or CLI.
///
/// Fields are deliberately loose (`term` as a plain month count, `purpose`
/// as free text); the intake guard turns a submission into a sanitized
/// [`ApplicantProfile`] or rejects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub loan_amount: f64,
    pub term: u32,
    pub purpose: String,
    pub annual_income: f64,
    pub emp_length: f64,
    pub dti: f64,
    pub utilization: f64,
    pub delinquencies: u32,
    pub fico: i32,
}

/// Supported repayment terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LoanTerm {
    Months36,
    Months60,
}

impl LoanTerm {
    pub const ALL: [LoanTerm; 2] = [LoanTerm::Months36, LoanTerm::Months60];

    pub const fn months(self) -> u32 {
        match self {
            LoanTerm::Months36 => 36,
            LoanTerm::Months60 => 60,
        }
    }
}

impl TryFrom<u32> for LoanTerm {
    type Error = UnsupportedTerm;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            36 => Ok(LoanTerm::Months36),
            60 => Ok(LoanTerm::Months60),
            other => Err(UnsupportedTerm(other)),
        }
    }
}

impl From<LoanTerm> for u32 {
    fn from(term: LoanTerm) -> Self {
        term.months()
    }
}

/// Raised when a submission names a term outside the advertised set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("term must be 36 or 60 months, got {0}")]
pub struct UnsupportedTerm(pub u32);

/// Advertised loan purposes. Scoring never consults the purpose; it exists
/// for intake validation and downstream presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanPurpose {
    #[serde(rename = "Debt Consolidation")]
    DebtConsolidation,
    #[serde(rename = "Home Improvement")]
    HomeImprovement,
    #[serde(rename = "Major Purchase")]
    MajorPurchase,
    Emergency,
    #[serde(rename = "Small Business")]
    SmallBusiness,
}

impl LoanPurpose {
    pub const ALL: [LoanPurpose; 5] = [
        LoanPurpose::DebtConsolidation,
        LoanPurpose::HomeImprovement,
        LoanPurpose::MajorPurchase,
        LoanPurpose::Emergency,
        LoanPurpose::SmallBusiness,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            LoanPurpose::DebtConsolidation => "Debt Consolidation",
            LoanPurpose::HomeImprovement => "Home Improvement",
            LoanPurpose::MajorPurchase => "Major Purchase",
            LoanPurpose::Emergency => "Emergency",
            LoanPurpose::SmallBusiness => "Small Business",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|purpose| purpose.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Sanitized applicant attributes, produced by the intake guard and
/// consumed by the scoring engine and the remote delegate.
///
/// Serializes to the wire contract shared with the delegate: `term` as a
/// month count, `purpose` as its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub loan_amount: f64,
    pub term: LoanTerm,
    pub purpose: LoanPurpose,
    pub annual_income: f64,
    pub emp_length: f64,
    pub dti: f64,
    pub utilization: f64,
    pub delinquencies: u32,
    pub fico: u16,
}

/// Heuristic credit decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditDecision {
    Approve,
    Refer,
    Decline,
}

impl CreditDecision {
    pub const fn label(self) -> &'static str {
        match self {
            CreditDecision::Approve => "Approve",
            CreditDecision::Refer => "Refer",
            CreditDecision::Decline => "Decline",
        }
    }
}

/// Coarse risk bucket derived from the predicted default probability.
/// Drives the displayed APR bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Medium => "Medium",
            RiskBand::High => "High",
        }
    }

    pub const fn apr_range(self) -> &'static str {
        match self {
            RiskBand::Low => "7% - 11%",
            RiskBand::Medium => "12% - 17%",
            RiskBand::High => "18%+",
        }
    }
}
