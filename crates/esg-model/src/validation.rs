//! Validation rules, persisted results, and consistency findings.

use serde::{Deserialize, Serialize};

use crate::status::{Severity, ValidationStatus};

/// A named, versioned validation policy. Created by configuration and read
/// by result producers; the engine never mutates the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRule {
    /// Unique rule code (e.g., "yearly_comparison").
    pub rule_code: String,
    pub rule_name: String,
    /// Rule family: "trend", "cross_check", "completeness", "range".
    pub rule_type: String,
    /// Owning module, if the rule is module-specific.
    pub module: Option<String>,
    pub description: String,
    pub severity: Severity,
    pub is_active: bool,
}

/// One persisted validation finding. Result history is append-only; the only
/// mutation is the `resolved` toggle when an operator dismisses a finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub company_id: i64,
    pub module: String,
    pub field: String,
    /// Observed value, as text (free-text responses are stored verbatim).
    pub value: Option<String>,
    pub rule_code: String,
    pub status: ValidationStatus,
    pub message: String,
    /// RFC 3339 timestamp of the validation pass.
    pub validated_at: String,
    pub resolved: bool,
}

/// A cross-source divergence on one logical metric. Transient: produced by
/// the consistency checker and folded into the caller's response; the caller
/// decides whether to persist it as a [`ValidationResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InconsistencyFinding {
    pub module: String,
    /// Human label for the compared quantity (e.g., "Scope 1 emissions").
    pub data_type: String,
    /// Source label and normalized value for the deviating source.
    pub source: String,
    pub value: f64,
    /// Group mean the deviation was measured against, when applicable.
    pub average: Option<f64>,
    pub deviation_pct: Option<f64>,
    pub severity: Severity,
    pub message: String,
}
