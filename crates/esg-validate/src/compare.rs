//! Year-over-year comparison and anomaly heuristics.

use chrono::Utc;

use esg_model::{ComparisonOutcome, Result, YearlyComparison};
use esg_standards::Thresholds;

use crate::normalize::numeric_value;
use crate::sources::MetricReader;
use crate::store::ValidationStore;

/// Compares a metric against its prior-year value and appends one
/// comparison row per invocation. A missing prior-year value is a normal
/// "no comparison available" outcome.
#[derive(Debug, Clone, Copy)]
pub struct YearlyComparator<'a> {
    thresholds: &'a Thresholds,
}

impl<'a> YearlyComparator<'a> {
    pub fn new(thresholds: &'a Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn compare(
        &self,
        store: &dyn ValidationStore,
        previous_values: &dyn MetricReader,
        company_id: i64,
        module: &str,
        field: &str,
        year: i32,
        current_value: f64,
    ) -> Result<ComparisonOutcome> {
        let previous_year = year - 1;
        let previous_value = previous_values
            .read(company_id, field, previous_year)
            .as_ref()
            .and_then(numeric_value);

        let Some(previous_value) = previous_value else {
            tracing::debug!(company_id, module, field, previous_year, "no prior-year value");
            return Ok(ComparisonOutcome::NoPriorData);
        };

        let change_amount = current_value - previous_value;
        let change_percentage = if previous_value != 0.0 {
            change_amount / previous_value * 100.0
        } else {
            0.0
        };

        let anomaly_reason = self.detect_anomaly(current_value, previous_value, change_percentage);

        let comparison = YearlyComparison {
            company_id,
            module: module.to_string(),
            field: field.to_string(),
            current_year: year,
            current_value,
            previous_year,
            previous_value,
            change_amount,
            change_percentage,
            anomaly_detected: anomaly_reason.is_some(),
            anomaly_reason,
            compared_at: Utc::now().to_rfc3339(),
        };
        store.append_comparison(comparison.clone())?;

        if comparison.anomaly_detected {
            tracing::info!(
                company_id,
                module,
                field,
                year,
                reason = comparison.anomaly_reason.as_deref().unwrap_or(""),
                "yearly anomaly detected"
            );
        }

        Ok(ComparisonOutcome::Compared(comparison))
    }

    /// First matching rule wins. A negative current value always reports as
    /// "negative value", even when the change percentage alone would also
    /// qualify as excessive.
    fn detect_anomaly(&self, current: f64, previous: f64, change_pct: f64) -> Option<String> {
        if current < 0.0 {
            Some("negative value".to_string())
        } else if change_pct.abs() > self.thresholds.yearly_change_alert_pct {
            Some(format!("excessive change: {change_pct:.1}%"))
        } else if previous > 0.0 && current == 0.0 {
            Some("value dropped to zero".to_string())
        } else if previous == 0.0 && current > previous * 10.0 {
            // previous * 10 is still zero here, so any positive current
            // trips this rule. Long-standing behavior, kept as-is.
            Some("excessive growth".to_string())
        } else {
            None
        }
    }
}
