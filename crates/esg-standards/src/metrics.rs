//! Cross-source metric definitions.
//!
//! A cross-source metric names one logical quantity that is captured
//! redundantly in independent stores (the internal module store, a GRI
//! indicator response, a CDP questionnaire answer) and must agree after unit
//! normalization. Definitions are data, not code: adding a comparable metric
//! is a registry entry, never a new branch in the checker.

use serde::{Deserialize, Serialize};

use esg_model::MeasurementKind;

/// One place a metric value can be read from: a registered source store and
/// the field/indicator code to ask it for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceField {
    /// Source registry key (e.g., "gri_indicators").
    pub source: String,
    /// Field name or indicator code within that source (e.g., "GRI 305-1").
    pub field: String,
    /// Short label used in finding messages (e.g., "gri").
    pub label: String,
}

impl SourceField {
    pub fn new(source: &str, field: &str, label: &str) -> Self {
        Self {
            source: source.to_string(),
            field: field.to_string(),
            label: label.to_string(),
        }
    }
}

/// A sub-part of a composite metric compared pairwise between two stores
/// (e.g., Scope 1 in the carbon store vs. the GRI 305-1 response). A
/// negative value on either side is always an error, regardless of
/// deviation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubPartCheck {
    pub label: String,
    pub left: SourceField,
    pub right: SourceField,
}

/// One logical quantity compared across 2+ independent sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossSourceMetricSpec {
    pub metric_code: String,
    /// Human label for findings (the "data type" in reports).
    pub data_type: String,
    pub module: String,
    pub kind: MeasurementKind,
    pub sources: Vec<SourceField>,
    #[serde(default)]
    pub sub_parts: Vec<SubPartCheck>,
}

/// Registry of cross-source metric definitions.
#[derive(Debug, Clone)]
pub struct MetricDefinitions {
    specs: Vec<CrossSourceMetricSpec>,
}

impl Default for MetricDefinitions {
    fn default() -> Self {
        let specs = vec![
            CrossSourceMetricSpec {
                metric_code: "total_emissions".to_string(),
                data_type: "Total carbon emissions".to_string(),
                module: "karbon".to_string(),
                kind: MeasurementKind::Emissions,
                sources: vec![
                    SourceField::new("carbon_emissions", "total_emissions", "karbon"),
                    SourceField::new("gri_indicators", "GRI 305", "gri"),
                    SourceField::new("cdp_climate", "C4.2", "cdp"),
                ],
                sub_parts: vec![
                    SubPartCheck {
                        label: "Scope 1 emissions".to_string(),
                        left: SourceField::new("carbon_emissions", "scope1_emissions", "karbon"),
                        right: SourceField::new("gri_indicators", "GRI 305-1", "gri"),
                    },
                    SubPartCheck {
                        label: "Scope 2 emissions".to_string(),
                        left: SourceField::new("carbon_emissions", "scope2_emissions", "karbon"),
                        right: SourceField::new("gri_indicators", "GRI 305-2", "gri"),
                    },
                    SubPartCheck {
                        label: "Scope 3 emissions".to_string(),
                        left: SourceField::new("carbon_emissions", "scope3_emissions", "karbon"),
                        right: SourceField::new("gri_indicators", "GRI 305-3", "gri"),
                    },
                ],
            },
            CrossSourceMetricSpec {
                metric_code: "total_energy".to_string(),
                data_type: "Total energy consumption (MWh)".to_string(),
                module: "enerji".to_string(),
                kind: MeasurementKind::Energy,
                sources: vec![
                    SourceField::new("tcfd_metrics", "total_energy_consumption", "tcfd"),
                    SourceField::new("gri_indicators", "GRI 302-1", "gri"),
                ],
                sub_parts: Vec::new(),
            },
            CrossSourceMetricSpec {
                metric_code: "energy_intensity".to_string(),
                data_type: "Energy intensity".to_string(),
                module: "enerji".to_string(),
                kind: MeasurementKind::EnergyIntensity,
                sources: vec![
                    SourceField::new("tcfd_metrics", "energy_intensity", "tcfd"),
                    SourceField::new("gri_indicators", "GRI 302-3", "gri"),
                ],
                sub_parts: Vec::new(),
            },
            CrossSourceMetricSpec {
                metric_code: "water_consumption".to_string(),
                data_type: "Water consumption (m3)".to_string(),
                module: "su".to_string(),
                kind: MeasurementKind::Water,
                sources: vec![
                    SourceField::new("tcfd_metrics", "water_consumption", "tcfd"),
                    SourceField::new("water_kpis", "total_consumption_m3", "water_kpi"),
                    SourceField::new("gri_indicators", "GRI 303-3", "gri"),
                ],
                sub_parts: Vec::new(),
            },
            CrossSourceMetricSpec {
                metric_code: "water_withdrawal".to_string(),
                data_type: "Water withdrawal (m3)".to_string(),
                module: "su".to_string(),
                kind: MeasurementKind::Water,
                sources: vec![
                    SourceField::new("water_kpis", "total_withdrawal_m3", "water_kpi"),
                    SourceField::new("gri_indicators", "GRI 303-1", "gri"),
                ],
                sub_parts: Vec::new(),
            },
            CrossSourceMetricSpec {
                metric_code: "water_discharge".to_string(),
                data_type: "Water discharge (m3)".to_string(),
                module: "su".to_string(),
                kind: MeasurementKind::Water,
                sources: vec![
                    SourceField::new("water_kpis", "total_discharge_m3", "water_kpi"),
                    SourceField::new("gri_indicators", "GRI 303-2", "gri"),
                ],
                sub_parts: Vec::new(),
            },
        ];
        Self { specs }
    }
}

impl MetricDefinitions {
    pub fn empty() -> Self {
        Self { specs: Vec::new() }
    }

    pub fn all(&self) -> &[CrossSourceMetricSpec] {
        &self.specs
    }

    pub fn for_module<'a>(
        &'a self,
        module: &'a str,
    ) -> impl Iterator<Item = &'a CrossSourceMetricSpec> {
        self.specs.iter().filter(move |spec| spec.module == module)
    }

    pub fn push(&mut self, spec: CrossSourceMetricSpec) {
        self.specs.push(spec);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_definitions_cover_three_modules() {
        let defs = MetricDefinitions::default();
        assert_eq!(defs.for_module("karbon").count(), 1);
        assert_eq!(defs.for_module("enerji").count(), 2);
        assert_eq!(defs.for_module("su").count(), 3);
    }

    #[test]
    fn every_definition_names_at_least_two_sources() {
        for spec in MetricDefinitions::default().all() {
            assert!(
                spec.sources.len() >= 2,
                "{} must compare 2+ sources",
                spec.metric_code
            );
        }
    }

    #[test]
    fn carbon_sub_parts_cover_all_scopes() {
        let defs = MetricDefinitions::default();
        let carbon = defs
            .for_module("karbon")
            .next()
            .expect("carbon definition");
        assert_eq!(carbon.sub_parts.len(), 3);
        assert_eq!(carbon.sub_parts[0].right.field, "GRI 305-1");
    }
}
