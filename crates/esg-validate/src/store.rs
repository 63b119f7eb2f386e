//! Persistence seam for validation entities.
//!
//! The engine owns validation results, yearly comparisons, quality scores
//! and missing-data alerts, but not the storage backing them. Backends
//! implement [`ValidationStore`]; the in-process [`MemoryStore`] is the
//! default and the test harness.
//!
//! Write semantics differ deliberately per entity: results and comparisons
//! are append-only audit history, quality scores are an idempotent upsert
//! per (company, module, year), and alert creation is a no-op while an
//! active alert exists for the same (company, module, field).

use std::collections::BTreeMap;
use std::sync::Mutex;

use esg_model::{
    AlertStatus, EsgError, MissingDataAlert, ModuleBreakdown, QualityScore, Result,
    ValidationResult, YearlyComparison,
};

pub trait ValidationStore {
    /// Append one finding to the result history.
    fn append_result(&self, result: ValidationResult) -> Result<()>;

    /// Append one year-over-year comparison row.
    fn append_comparison(&self, comparison: YearlyComparison) -> Result<()>;

    /// Replace the quality score for (company, module, year).
    fn upsert_quality_score(&self, score: QualityScore) -> Result<()>;

    /// Create an alert unless an active one already exists for the same
    /// (company, module, field). Returns whether a row was created.
    /// Existing alerts are left untouched, timestamps included.
    fn create_alert_if_absent(&self, alert: MissingDataAlert) -> Result<bool>;

    /// Explicitly resolve an active alert. Returns whether one was found.
    fn resolve_alert(
        &self,
        company_id: i64,
        module: &str,
        field: &str,
        resolved_at: &str,
    ) -> Result<bool>;

    /// Active alert count, company-wide or for one module.
    fn active_alert_count(&self, company_id: i64, module: Option<&str>) -> Result<u64>;

    /// Unresolved error/warning counts per module.
    fn unresolved_counts(&self, company_id: i64) -> Result<BTreeMap<String, ModuleBreakdown>>;

    /// Comparisons flagged anomalous for a company.
    fn anomaly_count(&self, company_id: i64) -> Result<u64>;

    fn quality_score(&self, company_id: i64, module: &str, year: i32)
    -> Result<Option<QualityScore>>;

    /// Mean overall score across modules, optionally restricted to a year.
    fn average_quality_score(&self, company_id: i64, year: Option<i32>) -> Result<f64>;
}

#[derive(Debug, Default)]
struct MemoryState {
    results: Vec<ValidationResult>,
    comparisons: Vec<YearlyComparison>,
    scores: BTreeMap<(i64, String, i32), QualityScore>,
    alerts: Vec<MissingDataAlert>,
}

/// Single-process store. One mutex guards all state, which also serializes
/// writes per key as the concurrency contract requires.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| EsgError::Storage("store mutex poisoned".to_string()))
    }

    /// All alerts for a company, in creation order.
    pub fn alerts(&self, company_id: i64) -> Result<Vec<MissingDataAlert>> {
        let state = self.lock()?;
        Ok(state
            .alerts
            .iter()
            .filter(|alert| alert.company_id == company_id)
            .cloned()
            .collect())
    }

    /// Full result history for a company.
    pub fn results(&self, company_id: i64) -> Result<Vec<ValidationResult>> {
        let state = self.lock()?;
        Ok(state
            .results
            .iter()
            .filter(|result| result.company_id == company_id)
            .cloned()
            .collect())
    }

    /// Comparison history for one (company, module, field).
    pub fn comparisons(
        &self,
        company_id: i64,
        module: &str,
        field: &str,
    ) -> Result<Vec<YearlyComparison>> {
        let state = self.lock()?;
        Ok(state
            .comparisons
            .iter()
            .filter(|row| {
                row.company_id == company_id && row.module == module && row.field == field
            })
            .cloned()
            .collect())
    }
}

impl ValidationStore for MemoryStore {
    fn append_result(&self, result: ValidationResult) -> Result<()> {
        self.lock()?.results.push(result);
        Ok(())
    }

    fn append_comparison(&self, comparison: YearlyComparison) -> Result<()> {
        self.lock()?.comparisons.push(comparison);
        Ok(())
    }

    fn upsert_quality_score(&self, score: QualityScore) -> Result<()> {
        let key = (score.company_id, score.module.clone(), score.year);
        self.lock()?.scores.insert(key, score);
        Ok(())
    }

    fn create_alert_if_absent(&self, alert: MissingDataAlert) -> Result<bool> {
        let mut state = self.lock()?;
        let exists = state.alerts.iter().any(|existing| {
            existing.company_id == alert.company_id
                && existing.module == alert.module
                && existing.field == alert.field
                && existing.status == AlertStatus::Active
        });
        if exists {
            return Ok(false);
        }
        state.alerts.push(alert);
        Ok(true)
    }

    fn resolve_alert(
        &self,
        company_id: i64,
        module: &str,
        field: &str,
        resolved_at: &str,
    ) -> Result<bool> {
        let mut state = self.lock()?;
        let alert = state.alerts.iter_mut().find(|alert| {
            alert.company_id == company_id
                && alert.module == module
                && alert.field == field
                && alert.status == AlertStatus::Active
        });
        match alert {
            Some(alert) => {
                alert.status = AlertStatus::Resolved;
                alert.resolved_at = Some(resolved_at.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn active_alert_count(&self, company_id: i64, module: Option<&str>) -> Result<u64> {
        let state = self.lock()?;
        Ok(state
            .alerts
            .iter()
            .filter(|alert| {
                alert.company_id == company_id
                    && alert.status == AlertStatus::Active
                    && module.is_none_or(|m| alert.module == m)
            })
            .count() as u64)
    }

    fn unresolved_counts(&self, company_id: i64) -> Result<BTreeMap<String, ModuleBreakdown>> {
        let state = self.lock()?;
        let mut counts: BTreeMap<String, ModuleBreakdown> = BTreeMap::new();
        for result in &state.results {
            if result.company_id != company_id || result.resolved {
                continue;
            }
            let entry = counts.entry(result.module.clone()).or_default();
            match result.status {
                esg_model::ValidationStatus::Error => entry.errors += 1,
                esg_model::ValidationStatus::Warning => entry.warnings += 1,
                esg_model::ValidationStatus::Pass => {}
            }
        }
        Ok(counts)
    }

    fn anomaly_count(&self, company_id: i64) -> Result<u64> {
        let state = self.lock()?;
        Ok(state
            .comparisons
            .iter()
            .filter(|row| row.company_id == company_id && row.anomaly_detected)
            .count() as u64)
    }

    fn quality_score(
        &self,
        company_id: i64,
        module: &str,
        year: i32,
    ) -> Result<Option<QualityScore>> {
        let state = self.lock()?;
        Ok(state
            .scores
            .get(&(company_id, module.to_string(), year))
            .cloned())
    }

    fn average_quality_score(&self, company_id: i64, year: Option<i32>) -> Result<f64> {
        let state = self.lock()?;
        let scores: Vec<f64> = state
            .scores
            .values()
            .filter(|score| {
                score.company_id == company_id && year.is_none_or(|y| score.year == y)
            })
            .map(|score| score.overall_score)
            .collect();
        if scores.is_empty() {
            return Ok(0.0);
        }
        Ok(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}
