//! Validation façade.
//!
//! [`ValidationService`] owns the policy objects (unit tables, thresholds,
//! scoring weights, manifests, metric definitions) and wires the individual
//! checkers together. Callers hand it a store, a source registry and the
//! values they want validated; everything else is configuration.

use std::collections::BTreeSet;

use anyhow::Context;
use chrono::{Datelike, Utc};

use esg_model::{
    ComparisonOutcome, MeasurementKind, MetricValue, MissingFieldFinding, QualityScore,
    ValidationResult, ValidationStatus, ValidationSummary,
};
use esg_standards::{
    MetricDefinitions, ModuleManifests, NormalizationConfig, RULE_CROSS_SOURCE,
    RULE_NEGATIVE_VALUE, ScoringPolicy, Thresholds,
};

use crate::compare::YearlyComparator;
use crate::consistency::ConsistencyChecker;
use crate::missing::MissingDataTracker;
use crate::normalize::Normalizer;
use crate::score::QualityScorer;
use crate::sources::{CompanyFieldReader, SourceRegistry};
use crate::store::ValidationStore;

/// One current-period value submitted for validation, together with the
/// source store that holds its history.
#[derive(Debug, Clone)]
pub struct TrackedField {
    pub module: String,
    pub field: String,
    pub kind: MeasurementKind,
    /// Source registry key for prior-year lookups.
    pub source: String,
    pub current_value: MetricValue,
}

pub struct ValidationService {
    config: NormalizationConfig,
    thresholds: Thresholds,
    policy: ScoringPolicy,
    manifests: ModuleManifests,
    definitions: MetricDefinitions,
    /// Timeliness reference year; defaults to the wall-clock year.
    current_year: Option<i32>,
}

impl Default for ValidationService {
    fn default() -> Self {
        Self {
            config: NormalizationConfig::default(),
            thresholds: Thresholds::default(),
            policy: ScoringPolicy::default(),
            manifests: ModuleManifests::default(),
            definitions: MetricDefinitions::default(),
            current_year: None,
        }
    }
}

impl ValidationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: NormalizationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_manifests(mut self, manifests: ModuleManifests) -> Self {
        self.manifests = manifests;
        self
    }

    pub fn with_definitions(mut self, definitions: MetricDefinitions) -> Self {
        self.definitions = definitions;
        self
    }

    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    /// Normalize one raw value into its kind's canonical unit.
    pub fn normalize(&self, value: &MetricValue, kind: MeasurementKind) -> Option<f64> {
        Normalizer::new(&self.config).normalize(value, kind)
    }

    /// Compare one tracked value against its prior-year counterpart.
    pub fn compare_yearly(
        &self,
        store: &dyn ValidationStore,
        sources: &SourceRegistry,
        company_id: i64,
        year: i32,
        tracked: &TrackedField,
    ) -> anyhow::Result<ComparisonOutcome> {
        let normalizer = Normalizer::new(&self.config);
        let Some(current) = normalizer.normalize(&tracked.current_value, tracked.kind) else {
            return Ok(ComparisonOutcome::NoPriorData);
        };
        let reader = sources
            .get(&tracked.source)
            .with_context(|| format!("unknown source {:?}", tracked.source))?;
        let outcome = YearlyComparator::new(&self.thresholds)
            .compare(
                store,
                reader,
                company_id,
                &tracked.module,
                &tracked.field,
                year,
                current,
            )
            .context("yearly comparison")?;
        Ok(outcome)
    }

    /// Run a tracker pass for one module.
    pub fn track_missing(
        &self,
        store: &dyn ValidationStore,
        fields: &dyn CompanyFieldReader,
        company_id: i64,
        module: &str,
    ) -> anyhow::Result<Vec<MissingFieldFinding>> {
        MissingDataTracker::new(&self.manifests)
            .track(store, fields, company_id, module)
            .context("missing-data tracking")
    }

    /// Recompute and persist the quality score for one module.
    pub fn score_module(
        &self,
        store: &dyn ValidationStore,
        sources: &SourceRegistry,
        company_id: i64,
        module: &str,
        year: i32,
    ) -> anyhow::Result<QualityScore> {
        let normalizer = Normalizer::new(&self.config);
        let checker = ConsistencyChecker::new(normalizer, &self.thresholds);
        QualityScorer::new(&self.policy, self.reference_year())
            .score_module(
                store,
                &checker,
                sources,
                &self.definitions,
                company_id,
                module,
                year,
            )
            .context("quality scoring")
    }

    /// Full validation pass for one company and reporting year:
    /// yearly comparisons for every tracked value, missing-field tracking,
    /// cross-source consistency (findings persisted as results), quality
    /// scoring per module, then an aggregate summary read back from the
    /// store. With `module = Some(..)` the run is scoped to that module and
    /// never writes to others; the summary is always company-wide.
    pub fn run_full_validation(
        &self,
        store: &dyn ValidationStore,
        sources: &SourceRegistry,
        fields: &dyn CompanyFieldReader,
        company_id: i64,
        module: Option<&str>,
        year: i32,
        tracked: &[TrackedField],
    ) -> anyhow::Result<ValidationSummary> {
        let normalizer = Normalizer::new(&self.config);
        let comparator = YearlyComparator::new(&self.thresholds);
        let checker = ConsistencyChecker::new(normalizer, &self.thresholds);
        let tracker = MissingDataTracker::new(&self.manifests);
        let scorer = QualityScorer::new(&self.policy, self.reference_year());

        tracing::info!(company_id, ?module, year, tracked = tracked.len(), "validation run started");

        for item in tracked {
            if module.is_some_and(|m| item.module != m) {
                continue;
            }
            let Some(current) = normalizer.normalize(&item.current_value, item.kind) else {
                tracing::debug!(
                    company_id,
                    module = %item.module,
                    field = %item.field,
                    "tracked value is not numeric, skipping comparison"
                );
                continue;
            };
            let Some(reader) = sources.get(&item.source) else {
                tracing::debug!(source = %item.source, "tracked field names an unregistered source");
                continue;
            };
            comparator
                .compare(store, reader, company_id, &item.module, &item.field, year, current)
                .with_context(|| format!("yearly comparison for {}/{}", item.module, item.field))?;
        }

        let modules: BTreeSet<&str> = match module {
            Some(module) => BTreeSet::from([module]),
            None => {
                let mut modules: BTreeSet<&str> = self.manifests.modules().collect();
                modules.extend(self.definitions.all().iter().map(|spec| spec.module.as_str()));
                modules.extend(tracked.iter().map(|item| item.module.as_str()));
                modules
            }
        };

        for module in &modules {
            tracker
                .track(store, fields, company_id, module)
                .with_context(|| format!("missing-data tracking for {module}"))?;

            for spec in self.definitions.for_module(module) {
                for finding in checker.check_metric(sources, company_id, year, spec) {
                    let rule_code = if finding.deviation_pct.is_some() {
                        RULE_CROSS_SOURCE
                    } else {
                        RULE_NEGATIVE_VALUE
                    };
                    store
                        .append_result(ValidationResult {
                            company_id,
                            module: finding.module.clone(),
                            field: spec.metric_code.clone(),
                            value: Some(finding.value.to_string()),
                            rule_code: rule_code.to_string(),
                            status: ValidationStatus::from(finding.severity),
                            message: finding.message,
                            validated_at: Utc::now().to_rfc3339(),
                            resolved: false,
                        })
                        .context("persisting consistency finding")?;
                }
            }
        }

        for module in &modules {
            scorer
                .score_module(store, &checker, sources, &self.definitions, company_id, module, year)
                .with_context(|| format!("quality scoring for {module}"))?;
        }

        let module_counts = store.unresolved_counts(company_id)?;
        let summary = ValidationSummary {
            total_errors: module_counts.values().map(|counts| counts.errors).sum(),
            total_warnings: module_counts.values().map(|counts| counts.warnings).sum(),
            total_missing: store.active_alert_count(company_id, None)?,
            total_anomalies: store.anomaly_count(company_id)?,
            average_quality_score: store.average_quality_score(company_id, Some(year))?,
            modules: module_counts,
        };

        tracing::info!(
            company_id,
            year,
            errors = summary.total_errors,
            warnings = summary.total_warnings,
            missing = summary.total_missing,
            anomalies = summary.total_anomalies,
            "validation run finished"
        );
        Ok(summary)
    }

    fn reference_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Utc::now().year())
    }
}
