use super::common::*;
use crate::workflows::qualification::domain::{LoanPurpose, LoanTerm};
use crate::workflows::qualification::intake::{IntakeGuard, IntakeViolation};

#[test]
fn sanitizes_a_well_formed_submission() {
    let guard = IntakeGuard::default();
    let profile = guard
        .profile_from_submission(prime_application())
        .expect("prime sample passes intake");

    assert_eq!(profile.term, LoanTerm::Months36);
    assert_eq!(profile.purpose, LoanPurpose::MajorPurchase);
    assert_eq!(profile.fico, 780);
    assert_eq!(profile.dti, 12.0);
}

#[test]
fn clamps_out_of_range_numerics() {
    let guard = IntakeGuard::default();
    let mut submission = prime_application();
    submission.dti = 120.0;
    submission.utilization = 150.0;
    submission.fico = 900;
    submission.emp_length = 64.0;
    submission.delinquencies = 99;
    submission.annual_income = -12_000.0;

    let profile = guard
        .profile_from_submission(submission)
        .expect("clamped submission passes intake");

    assert_eq!(profile.dti, 80.0);
    assert_eq!(profile.utilization, 100.0);
    assert_eq!(profile.fico, 850);
    assert_eq!(profile.emp_length, 50.0);
    assert_eq!(profile.delinquencies, 50);
    assert_eq!(profile.annual_income, 0.0);
}

#[test]
fn clamps_fico_up_to_the_scale_floor() {
    let guard = IntakeGuard::default();
    let mut submission = prime_application();
    submission.fico = 150;

    let profile = guard
        .profile_from_submission(submission)
        .expect("clamped submission passes intake");

    assert_eq!(profile.fico, 300);
}

#[test]
fn rejects_negative_loan_amount() {
    let guard = IntakeGuard::default();
    let mut submission = prime_application();
    submission.loan_amount = -1.0;

    match guard.profile_from_submission(submission) {
        Err(IntakeViolation::NegativeLoanAmount(amount)) => assert_eq!(amount, -1.0),
        other => panic!("expected negative loan amount violation, got {other:?}"),
    }
}

#[test]
fn rejects_unsupported_term() {
    let guard = IntakeGuard::default();
    let mut submission = prime_application();
    submission.term = 48;

    match guard.profile_from_submission(submission) {
        Err(IntakeViolation::UnsupportedTerm(term)) => assert_eq!(term.0, 48),
        other => panic!("expected unsupported term violation, got {other:?}"),
    }
}

#[test]
fn rejects_blank_purpose() {
    let guard = IntakeGuard::default();
    let mut submission = prime_application();
    submission.purpose = "   ".to_string();

    assert!(matches!(
        guard.profile_from_submission(submission),
        Err(IntakeViolation::EmptyPurpose)
    ));
}

#[test]
fn rejects_unknown_purpose() {
    let guard = IntakeGuard::default();
    let mut submission = prime_application();
    submission.purpose = "Vacation".to_string();

    match guard.profile_from_submission(submission) {
        Err(IntakeViolation::UnknownPurpose(label)) => assert_eq!(label, "Vacation"),
        other => panic!("expected unknown purpose violation, got {other:?}"),
    }
}

#[test]
fn matches_purposes_case_insensitively() {
    let guard = IntakeGuard::default();
    let mut submission = prime_application();
    submission.purpose = "debt consolidation".to_string();

    let profile = guard
        .profile_from_submission(submission)
        .expect("lowercase label still resolves");

    assert_eq!(profile.purpose, LoanPurpose::DebtConsolidation);
}

#[test]
fn rejects_non_finite_values() {
    let guard = IntakeGuard::default();
    let mut submission = prime_application();
    submission.dti = f64::NAN;

    assert!(matches!(
        guard.profile_from_submission(submission),
        Err(IntakeViolation::NonFiniteValue { field: "dti" })
    ));
}
