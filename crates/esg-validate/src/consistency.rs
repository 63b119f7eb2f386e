//! Cross-source consistency checking.
//!
//! For each declared metric, every registered source is queried, normalized
//! into the canonical unit, and compared against the group mean. Sources
//! that returned no usable value are dropped; a comparison needs at least
//! two normalized values. This component performs no writes; findings are
//! returned to the caller, which decides whether to persist them.

use esg_model::{InconsistencyFinding, MeasurementKind, Severity};
use esg_standards::{CrossSourceMetricSpec, SourceField, SubPartCheck, Thresholds};

use crate::normalize::Normalizer;
use crate::sources::SourceRegistry;

#[derive(Debug, Clone, Copy)]
pub struct ConsistencyChecker<'a> {
    normalizer: Normalizer<'a>,
    thresholds: &'a Thresholds,
}

impl<'a> ConsistencyChecker<'a> {
    pub fn new(normalizer: Normalizer<'a>, thresholds: &'a Thresholds) -> Self {
        Self {
            normalizer,
            thresholds,
        }
    }

    /// Check one metric definition for (company, year).
    pub fn check_metric(
        &self,
        sources: &SourceRegistry,
        company_id: i64,
        year: i32,
        spec: &CrossSourceMetricSpec,
    ) -> Vec<InconsistencyFinding> {
        let mut findings = Vec::new();

        let values: Vec<(&SourceField, f64)> = spec
            .sources
            .iter()
            .filter_map(|source| {
                self.read_normalized(sources, company_id, year, source, spec.kind)
                    .map(|value| (source, value))
            })
            .collect();

        if values.len() >= 2 {
            let mean = values.iter().map(|(_, v)| v).sum::<f64>() / values.len() as f64;
            // A zero/negative mean would make the deviation ratio
            // meaningless; deviation scoring is skipped for this metric.
            if mean > 0.0 {
                for (source, value) in &values {
                    let deviation_pct = (value - mean).abs() / mean * 100.0;
                    if deviation_pct > self.thresholds.deviation_flag_pct {
                        let severity = self.thresholds.deviation_severity(deviation_pct);
                        findings.push(InconsistencyFinding {
                            module: spec.module.clone(),
                            data_type: spec.data_type.clone(),
                            source: source.label.clone(),
                            value: *value,
                            average: Some(mean),
                            deviation_pct: Some(deviation_pct),
                            severity,
                            message: format!(
                                "{} value for {} deviates {:.1}% from the cross-source mean",
                                source.label, spec.data_type, deviation_pct
                            ),
                        });
                    }
                }
            }
        } else {
            tracing::debug!(
                company_id,
                year,
                metric = %spec.metric_code,
                usable_sources = values.len(),
                "fewer than two usable sources, skipping comparison"
            );
        }

        for part in &spec.sub_parts {
            findings.extend(self.check_sub_part(sources, company_id, year, spec, part));
        }

        findings
    }

    /// Pairwise check of one sub-part reported in two places. Either side
    /// being negative is always an error, regardless of deviation.
    fn check_sub_part(
        &self,
        sources: &SourceRegistry,
        company_id: i64,
        year: i32,
        spec: &CrossSourceMetricSpec,
        part: &SubPartCheck,
    ) -> Vec<InconsistencyFinding> {
        let left = self.read_normalized(sources, company_id, year, &part.left, spec.kind);
        let right = self.read_normalized(sources, company_id, year, &part.right, spec.kind);
        let (Some(left), Some(right)) = (left, right) else {
            return Vec::new();
        };

        if left < 0.0 || right < 0.0 {
            return vec![InconsistencyFinding {
                module: spec.module.clone(),
                data_type: part.label.clone(),
                source: part.left.label.clone(),
                value: left,
                average: None,
                deviation_pct: None,
                severity: Severity::Error,
                message: format!("{} cannot be negative", part.label),
            }];
        }

        let mean = (left + right) / 2.0;
        if mean <= 0.0 {
            return Vec::new();
        }
        let deviation_pct = (left - right).abs() / mean * 100.0;
        if deviation_pct <= self.thresholds.deviation_flag_pct {
            return Vec::new();
        }
        let severity = self.thresholds.deviation_severity(deviation_pct);
        vec![InconsistencyFinding {
            module: spec.module.clone(),
            data_type: part.label.clone(),
            source: part.left.label.clone(),
            value: left,
            average: Some(mean),
            deviation_pct: Some(deviation_pct),
            severity,
            message: format!(
                "{} disagrees between {} and {} (deviation {:.1}%)",
                part.label, part.left.label, part.right.label, deviation_pct
            ),
        }]
    }

    fn read_normalized(
        &self,
        sources: &SourceRegistry,
        company_id: i64,
        year: i32,
        source: &SourceField,
        kind: MeasurementKind,
    ) -> Option<f64> {
        let reader = sources.get(&source.source)?;
        let raw = reader.read(company_id, &source.field, year)?;
        self.normalizer.normalize(&raw, kind)
    }
}
