use super::domain::{ApplicantProfile, LoanApplication, LoanPurpose, LoanTerm, UnsupportedTerm};

/// Validation errors raised by the intake guard.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("loan_amount must be >= 0, got {0}")]
    NegativeLoanAmount(f64),
    #[error(transparent)]
    UnsupportedTerm(#[from] UnsupportedTerm),
    #[error("purpose must be a non-empty label")]
    EmptyPurpose,
    #[error("unknown loan purpose '{0}'")]
    UnknownPurpose(String),
    #[error("{field} must be a finite number")]
    NonFiniteValue { field: &'static str },
}

/// Clamp ranges applied to numeric submission fields before scoring.
///
/// The engine itself never enforces ranges; these bounds keep downstream
/// arithmetic inside the envelope the heuristic was tuned for.
#[derive(Debug, Clone)]
pub struct IntakeBounds {
    pub dti_max: f64,
    pub utilization_max: f64,
    pub fico_min: u16,
    pub fico_max: u16,
    pub emp_length_max: f64,
    pub delinquencies_max: u32,
}

impl Default for IntakeBounds {
    fn default() -> Self {
        Self {
            dti_max: 80.0,
            utilization_max: 100.0,
            fico_min: 300,
            fico_max: 850,
            emp_length_max: 50.0,
            delinquencies_max: 50,
        }
    }
}

/// Guard responsible for producing [`ApplicantProfile`] instances.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    bounds: IntakeBounds,
}

impl IntakeGuard {
    pub fn with_bounds(bounds: IntakeBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &IntakeBounds {
        &self.bounds
    }

    /// Convert an inbound submission into a sanitized applicant profile.
    pub fn profile_from_submission(
        &self,
        submission: LoanApplication,
    ) -> Result<ApplicantProfile, IntakeViolation> {
        check_finite("loan_amount", submission.loan_amount)?;
        check_finite("annual_income", submission.annual_income)?;
        check_finite("emp_length", submission.emp_length)?;
        check_finite("dti", submission.dti)?;
        check_finite("utilization", submission.utilization)?;

        if submission.loan_amount < 0.0 {
            return Err(IntakeViolation::NegativeLoanAmount(submission.loan_amount));
        }

        let term = LoanTerm::try_from(submission.term)?;

        let raw_purpose = submission.purpose.trim();
        if raw_purpose.is_empty() {
            return Err(IntakeViolation::EmptyPurpose);
        }
        let purpose = LoanPurpose::from_label(raw_purpose)
            .ok_or_else(|| IntakeViolation::UnknownPurpose(raw_purpose.to_string()))?;

        let bounds = &self.bounds;
        let fico = submission
            .fico
            .clamp(i32::from(bounds.fico_min), i32::from(bounds.fico_max)) as u16;

        Ok(ApplicantProfile {
            loan_amount: submission.loan_amount,
            term,
            purpose,
            annual_income: submission.annual_income.max(0.0),
            emp_length: submission.emp_length.clamp(0.0, bounds.emp_length_max),
            dti: submission.dti.clamp(0.0, bounds.dti_max),
            utilization: submission.utilization.clamp(0.0, bounds.utilization_max),
            delinquencies: submission.delinquencies.min(bounds.delinquencies_max),
            fico,
        })
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), IntakeViolation> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(IntakeViolation::NonFiniteValue { field })
    }
}
