use clap::Args;
use credit_qualifier::config::AppConfig;
use credit_qualifier::error::AppError;
use credit_qualifier::workflows::qualification::{
    default_application, sample_applications, sample_by_name, LoanApplication,
    QualificationReport, QualificationService, ScoringConfig,
};

use crate::infra::build_qualification_service;

#[derive(Args, Debug, Default)]
pub(crate) struct QualifyArgs {
    /// Evaluate a named sample applicant (Prime, Near-prime, Thin file,
    /// High DTI, Edge Case) instead of individual field flags
    #[arg(long)]
    pub(crate) preset: Option<String>,
    /// Requested loan amount in dollars
    #[arg(long)]
    pub(crate) loan_amount: Option<f64>,
    /// Repayment term in months (36 or 60)
    #[arg(long)]
    pub(crate) term: Option<u32>,
    /// Loan purpose label
    #[arg(long)]
    pub(crate) purpose: Option<String>,
    /// Stated annual income in dollars
    #[arg(long)]
    pub(crate) annual_income: Option<f64>,
    /// Employment length in years
    #[arg(long)]
    pub(crate) emp_length: Option<f64>,
    /// Debt-to-income ratio in percent
    #[arg(long)]
    pub(crate) dti: Option<f64>,
    /// Revolving utilization in percent
    #[arg(long)]
    pub(crate) utilization: Option<f64>,
    /// Delinquencies in the last two years
    #[arg(long)]
    pub(crate) delinquencies: Option<u32>,
    /// Credit score on the 300-850 scale
    #[arg(long)]
    pub(crate) fico: Option<i32>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {}

impl QualifyArgs {
    fn into_application(self) -> Result<LoanApplication, AppError> {
        if let Some(name) = &self.preset {
            return sample_by_name(name).ok_or_else(|| {
                let names: Vec<&str> = sample_applications()
                    .iter()
                    .map(|sample| sample.name)
                    .collect();
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!(
                        "unknown sample profile '{name}'; available: {}",
                        names.join(", ")
                    ),
                )
                .into()
            });
        }

        let mut application = default_application();
        if let Some(loan_amount) = self.loan_amount {
            application.loan_amount = loan_amount;
        }
        if let Some(term) = self.term {
            application.term = term;
        }
        if let Some(purpose) = self.purpose {
            application.purpose = purpose;
        }
        if let Some(annual_income) = self.annual_income {
            application.annual_income = annual_income;
        }
        if let Some(emp_length) = self.emp_length {
            application.emp_length = emp_length;
        }
        if let Some(dti) = self.dti {
            application.dti = dti;
        }
        if let Some(utilization) = self.utilization {
            application.utilization = utilization;
        }
        if let Some(delinquencies) = self.delinquencies {
            application.delinquencies = delinquencies;
        }
        if let Some(fico) = self.fico {
            application.fico = fico;
        }
        Ok(application)
    }
}

/// Evaluate a single applicant through the configured service, using the
/// remote delegate when one is set up in the environment.
pub(crate) async fn run_qualify(args: QualifyArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = build_qualification_service(&config)?;

    let application = args.into_application()?;
    let report = service.qualify(application).await?;

    render_report(&report);
    Ok(())
}

/// Run every sample applicant through the local engine.
pub(crate) async fn run_demo(_args: DemoArgs) -> Result<(), AppError> {
    let service = QualificationService::local(ScoringConfig::default());

    println!("Credit qualification demo");
    for sample in sample_applications() {
        let report = service.qualify(sample.application).await?;
        println!("\n== {} ==", sample.name);
        render_report(&report);
    }
    Ok(())
}

fn render_report(report: &QualificationReport) {
    let assessment = &report.assessment;
    println!(
        "Assessment outcome: {} | {} risk | est. APR {}",
        assessment.decision.label(),
        assessment.risk_band.label(),
        assessment.apr_range
    );
    println!(
        "- acceptance likelihood {:.0}% | predicted default risk {:.0}%",
        assessment.accept_probability, assessment.default_probability
    );
    println!("- source: {}", report.source.label());
    if let Some(advisory) = &report.advisory {
        println!("- advisory: {advisory}");
    }
    println!("Primary decision drivers:");
    for driver in &assessment.drivers {
        println!("  - {driver}");
    }
    if !assessment.suggestions.is_empty() {
        println!("Educational guidance:");
        for suggestion in &assessment.suggestions {
            println!("  - {suggestion}");
        }
    }
    println!("{}", report.disclaimer);
}
