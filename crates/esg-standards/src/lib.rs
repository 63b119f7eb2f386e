#![deny(unsafe_code)]

pub mod error;
pub mod manifest;
pub mod metrics;
pub mod normalization;
pub mod rules;
pub mod scoring;

pub use crate::error::StandardsError;
pub use crate::manifest::{ModuleManifests, RequiredFieldSpec};
pub use crate::metrics::{CrossSourceMetricSpec, MetricDefinitions, SourceField, SubPartCheck};
pub use crate::normalization::{NormalizationConfig, UnitScale};
pub use crate::rules::{
    RULE_CROSS_SOURCE, RULE_MISSING_FIELD, RULE_NEGATIVE_VALUE, RULE_YEARLY_COMPARISON,
    RuleCatalog, builtin_rules,
};
pub use crate::scoring::{ScoringPolicy, Thresholds};
