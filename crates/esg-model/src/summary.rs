//! Aggregate validation summaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-module unresolved finding counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleBreakdown {
    pub errors: u64,
    pub warnings: u64,
}

/// Aggregate outcome of a full validation run for one company, read by
/// dashboards and report generators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total_errors: u64,
    pub total_warnings: u64,
    /// Active missing-data alerts.
    pub total_missing: u64,
    /// Year-over-year comparisons flagged as anomalous.
    pub total_anomalies: u64,
    pub average_quality_score: f64,
    pub modules: BTreeMap<String, ModuleBreakdown>,
}

impl ValidationSummary {
    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }
}
