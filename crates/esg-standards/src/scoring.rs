//! Scoring and threshold policy.
//!
//! Every constant the quality score depends on lives here, named, so the
//! formula stays auditable for compliance reviews. The values mirror the
//! published QA methodology: each missing mandatory field costs 5 points of
//! completeness, each unresolved finding 3 points of accuracy, each
//! cross-source inconsistency 10 points of consistency.

use esg_model::Severity;

/// Deviation and change thresholds applied by the checkers.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// Deviation from the group mean (percent) above which a finding is
    /// emitted at all.
    pub deviation_flag_pct: f64,
    /// Deviation (percent) at or above which the finding is an error rather
    /// than a warning.
    pub deviation_error_pct: f64,
    /// Absolute year-over-year change (percent) treated as anomalous.
    pub yearly_change_alert_pct: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            deviation_flag_pct: 10.0,
            deviation_error_pct: 20.0,
            yearly_change_alert_pct: 50.0,
        }
    }
}

impl Thresholds {
    /// Severity of a deviation finding already past the flag threshold.
    pub fn deviation_severity(&self, deviation_pct: f64) -> Severity {
        if deviation_pct < self.deviation_error_pct {
            Severity::Warning
        } else {
            Severity::Error
        }
    }
}

/// Weights and penalties for the composite quality score.
#[derive(Debug, Clone, Copy)]
pub struct ScoringPolicy {
    pub missing_field_penalty: f64,
    pub finding_penalty: f64,
    pub inconsistency_penalty: f64,
    pub completeness_weight: f64,
    pub accuracy_weight: f64,
    pub consistency_weight: f64,
    pub timeliness_weight: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            missing_field_penalty: 5.0,
            finding_penalty: 3.0,
            inconsistency_penalty: 10.0,
            completeness_weight: 0.40,
            accuracy_weight: 0.30,
            consistency_weight: 0.20,
            timeliness_weight: 0.10,
        }
    }
}

impl ScoringPolicy {
    pub fn completeness(&self, active_missing_fields: u64) -> f64 {
        (100.0 - self.missing_field_penalty * active_missing_fields as f64).max(0.0)
    }

    pub fn accuracy(&self, unresolved_findings: u64) -> f64 {
        (100.0 - self.finding_penalty * unresolved_findings as f64).max(0.0)
    }

    pub fn consistency(&self, inconsistencies: u64) -> f64 {
        (100.0 - self.inconsistency_penalty * inconsistencies as f64).max(0.0)
    }

    /// Reporting-year freshness tiers: the current year scores 100, the year
    /// before 80, up to two years back 60, anything older 40.
    pub fn timeliness(&self, reporting_year: i32, current_year: i32) -> f64 {
        if reporting_year == current_year {
            100.0
        } else if reporting_year == current_year - 1 {
            80.0
        } else if reporting_year >= current_year - 2 {
            60.0
        } else {
            40.0
        }
    }

    pub fn overall(
        &self,
        completeness: f64,
        accuracy: f64,
        consistency: f64,
        timeliness: f64,
    ) -> f64 {
        self.completeness_weight * completeness
            + self.accuracy_weight * accuracy
            + self.consistency_weight * consistency
            + self.timeliness_weight * timeliness
    }
}
