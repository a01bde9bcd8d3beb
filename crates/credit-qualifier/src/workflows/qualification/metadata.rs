use serde::Serialize;

use super::domain::{LoanPurpose, LoanTerm};

/// Presentation hints for one numeric input: hard slider bounds plus the
/// band most applicants fall into. Not the intake clamp ranges — those
/// stay with the guard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p99: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
}

impl NumericRange {
    fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            recommended_min: None,
            recommended_max: None,
            p1: None,
            p99: None,
            unit: None,
        }
    }

    fn recommended(mut self, min: f64, max: f64) -> Self {
        self.recommended_min = Some(min);
        self.recommended_max = Some(max);
        self
    }

    fn percentiles(mut self, p1: f64, p99: f64) -> Self {
        self.p1 = Some(p1);
        self.p99 = Some(p99);
        self
    }

    fn unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }
}

/// Field catalog served at `/api/metadata` so form clients can render
/// sliders and option lists without hardcoding the domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldCatalog {
    pub loan_amount: NumericRange,
    pub annual_income: NumericRange,
    pub emp_length: NumericRange,
    pub dti: NumericRange,
    pub utilization: NumericRange,
    pub delinquencies: NumericRange,
    pub fico: NumericRange,
    pub purposes: Vec<&'static str>,
    pub terms: Vec<u32>,
}

impl FieldCatalog {
    pub fn standard() -> Self {
        Self {
            loan_amount: NumericRange::new(1_000.0, 50_000.0)
                .recommended(5_000.0, 35_000.0)
                .percentiles(1_000.0, 45_000.0),
            annual_income: NumericRange::new(10_000.0, 250_000.0)
                .recommended(35_000.0, 150_000.0),
            emp_length: NumericRange::new(0.0, 50.0).recommended(0.0, 40.0),
            dti: NumericRange::new(0.0, 60.0).recommended(0.0, 45.0).unit("%"),
            utilization: NumericRange::new(0.0, 100.0)
                .recommended(5.0, 90.0)
                .unit("%"),
            delinquencies: NumericRange::new(0.0, 10.0).recommended(0.0, 2.0),
            fico: NumericRange::new(300.0, 850.0).recommended(580.0, 820.0),
            purposes: LoanPurpose::ALL.iter().map(|p| p.label()).collect(),
            terms: LoanTerm::ALL.iter().map(|t| t.months()).collect(),
        }
    }
}
