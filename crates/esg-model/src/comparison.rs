//! Year-over-year comparison records.

use serde::{Deserialize, Serialize};

/// One appended year-over-year comparison row. History is append-only: every
/// comparator invocation adds a row, prior rows are never overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyComparison {
    pub company_id: i64,
    pub module: String,
    pub field: String,
    pub current_year: i32,
    pub current_value: f64,
    pub previous_year: i32,
    pub previous_value: f64,
    pub change_amount: f64,
    pub change_percentage: f64,
    pub anomaly_detected: bool,
    pub anomaly_reason: Option<String>,
    /// RFC 3339 timestamp of the comparison.
    pub compared_at: String,
}

/// Outcome of a comparison request. A missing prior-year value is a normal
/// "not applicable" result, not an error.
#[derive(Debug, Clone)]
pub enum ComparisonOutcome {
    Compared(YearlyComparison),
    NoPriorData,
}

impl ComparisonOutcome {
    pub fn comparison(&self) -> Option<&YearlyComparison> {
        match self {
            ComparisonOutcome::Compared(comparison) => Some(comparison),
            ComparisonOutcome::NoPriorData => None,
        }
    }

    pub fn anomaly_detected(&self) -> bool {
        self.comparison().is_some_and(|c| c.anomaly_detected)
    }
}
