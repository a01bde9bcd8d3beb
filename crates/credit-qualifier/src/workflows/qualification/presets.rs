use super::domain::LoanApplication;

/// Named applicant profile used by demos and documentation.
#[derive(Debug, Clone)]
pub struct SampleApplication {
    pub name: &'static str,
    pub application: LoanApplication,
}

/// The canned applicant profiles covering the interesting corners of the
/// heuristic: a prime borrower, near-prime, a thin credit file, a
/// high-DTI consolidator, and an adversarial edge case.
pub fn sample_applications() -> Vec<SampleApplication> {
    vec![
        SampleApplication {
            name: "Prime",
            application: LoanApplication {
                loan_amount: 15_000.0,
                term: 36,
                purpose: "Major Purchase".to_string(),
                annual_income: 95_000.0,
                emp_length: 10.0,
                dti: 12.0,
                utilization: 15.0,
                delinquencies: 0,
                fico: 780,
            },
        },
        SampleApplication {
            name: "Near-prime",
            application: LoanApplication {
                loan_amount: 10_000.0,
                term: 60,
                purpose: "Debt Consolidation".to_string(),
                annual_income: 55_000.0,
                emp_length: 5.0,
                dti: 28.0,
                utilization: 45.0,
                delinquencies: 0,
                fico: 660,
            },
        },
        SampleApplication {
            name: "Thin file",
            application: LoanApplication {
                loan_amount: 5_000.0,
                term: 36,
                purpose: "Emergency".to_string(),
                annual_income: 42_000.0,
                emp_length: 2.0,
                dti: 15.0,
                utilization: 5.0,
                delinquencies: 0,
                fico: 610,
            },
        },
        SampleApplication {
            name: "High DTI",
            application: LoanApplication {
                loan_amount: 25_000.0,
                term: 60,
                purpose: "Debt Consolidation".to_string(),
                annual_income: 60_000.0,
                emp_length: 8.0,
                dti: 48.0,
                utilization: 30.0,
                delinquencies: 0,
                fico: 690,
            },
        },
        SampleApplication {
            name: "Edge Case",
            application: LoanApplication {
                loan_amount: 50_000.0,
                term: 60,
                purpose: "Small Business".to_string(),
                annual_income: 15_000.0,
                emp_length: 0.0,
                dti: 55.0,
                utilization: 95.0,
                delinquencies: 5,
                fico: 520,
            },
        },
    ]
}

/// Neutral starting values, matching the defaults a fresh form shows.
pub fn default_application() -> LoanApplication {
    LoanApplication {
        loan_amount: 10_000.0,
        term: 36,
        purpose: "Debt Consolidation".to_string(),
        annual_income: 50_000.0,
        emp_length: 2.0,
        dti: 20.0,
        utilization: 30.0,
        delinquencies: 0,
        fico: 700,
    }
}

/// Look up a sample application by its display name.
pub fn sample_by_name(name: &str) -> Option<LoanApplication> {
    sample_applications()
        .into_iter()
        .find(|sample| sample.name.eq_ignore_ascii_case(name.trim()))
        .map(|sample| sample.application)
}
