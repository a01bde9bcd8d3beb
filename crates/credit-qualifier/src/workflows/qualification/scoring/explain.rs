use super::super::domain::ApplicantProfile;

const DRIVER_LIMIT: usize = 3;
const SUGGESTION_LIMIT: usize = 2;

const FALLBACK_DRIVERS: [&str; 2] = [
    "Strong historical credit alignment",
    "Sustainable income-to-debt ratio",
];

/// Ordered list of the signals most likely to have shaped the decision,
/// capped at three entries. When no risk signal fires, a fixed two-item
/// positive summary is returned instead.
pub(crate) fn decision_drivers(profile: &ApplicantProfile) -> Vec<String> {
    let mut drivers = Vec::new();

    if profile.dti > 35.0 {
        drivers.push("DTI is high compared to typical applicants".to_string());
    }
    if profile.utilization > 50.0 {
        drivers.push("Revolving utilization is elevated".to_string());
    }
    if f64::from(profile.fico) < 650.0 {
        drivers.push("Credit score bucket is below prime thresholds".to_string());
    }
    if profile.loan_amount > profile.annual_income * 0.4 {
        drivers.push("Loan-to-income ratio increases risk".to_string());
    }

    if drivers.is_empty() {
        return FALLBACK_DRIVERS.iter().map(|s| s.to_string()).collect();
    }

    drivers.truncate(DRIVER_LIMIT);
    drivers
}

/// Ordered, capped list of actionable guidance strings.
pub(crate) fn improvement_suggestions(profile: &ApplicantProfile) -> Vec<String> {
    let mut suggestions = Vec::new();

    if profile.dti > 20.0 {
        suggestions.push(format!(
            "Reducing DTI from {}% → 20% would likely improve approval odds.",
            profile.dti
        ));
    }
    if profile.utilization > 30.0 {
        suggestions.push(format!(
            "Lowering utilization from {}% → 30% reduces predicted default risk.",
            profile.utilization
        ));
    }
    if profile.delinquencies > 0 {
        suggestions.push(
            "Consistent on-time payments over the next 12 months will significantly boost profile."
                .to_string(),
        );
    }

    suggestions.truncate(SUGGESTION_LIMIT);
    suggestions
}
