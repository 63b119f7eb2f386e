//! Collaborator interfaces.
//!
//! The engine never owns raw disclosure data; it reads it through these
//! traits, one implementation per external store (internal metric tables,
//! GRI indicator responses, CDP questionnaire answers). All reads are
//! independent pure queries.

use std::collections::BTreeMap;

use esg_model::MetricValue;

/// Read-only access to one raw-metric source.
pub trait MetricReader {
    /// Raw value for (company, field, year); `None` when the source holds
    /// nothing for that key. Values may be numeric or free text.
    fn read(&self, company_id: i64, field: &str, year: i32) -> Option<MetricValue>;
}

/// Emptiness probe used by the missing-data tracker.
pub trait CompanyFieldReader {
    fn is_empty(&self, company_id: i64, table: &str, field: &str) -> bool;
}

/// Named registry of metric sources, keyed by the source names metric
/// definitions refer to (e.g., "gri_indicators").
#[derive(Default)]
pub struct SourceRegistry {
    sources: BTreeMap<String, Box<dyn MetricReader>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, reader: Box<dyn MetricReader>) {
        self.sources.insert(name.to_string(), reader);
    }

    pub fn get(&self, name: &str) -> Option<&dyn MetricReader> {
        self.sources.get(name).map(Box::as_ref)
    }
}

/// In-memory metric source, used by tests and fixtures.
#[derive(Debug, Default)]
pub struct MapMetricReader {
    values: BTreeMap<(i64, String, i32), MetricValue>,
}

impl MapMetricReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, company_id: i64, field: &str, year: i32, value: MetricValue) {
        self.values
            .insert((company_id, field.to_string(), year), value);
    }
}

impl MetricReader for MapMetricReader {
    fn read(&self, company_id: i64, field: &str, year: i32) -> Option<MetricValue> {
        self.values
            .get(&(company_id, field.to_string(), year))
            .cloned()
    }
}
