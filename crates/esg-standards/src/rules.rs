//! Built-in validation rule catalog.

use esg_model::{Severity, ValidationRule};

/// Year-over-year anomaly heuristics.
pub const RULE_YEARLY_COMPARISON: &str = "yearly_comparison";
/// Divergence of one metric across independent sources.
pub const RULE_CROSS_SOURCE: &str = "cross_source_consistency";
/// Empty mandatory disclosure field.
pub const RULE_MISSING_FIELD: &str = "missing_required_field";
/// A physical quantity reported as negative.
pub const RULE_NEGATIVE_VALUE: &str = "negative_value";

/// Read-only rule catalog. Rules are configuration; the engine only reads
/// them and stamps their codes onto results.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<ValidationRule>,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }
}

impl RuleCatalog {
    pub fn all(&self) -> &[ValidationRule] {
        &self.rules
    }

    pub fn get(&self, rule_code: &str) -> Option<&ValidationRule> {
        self.rules
            .iter()
            .find(|rule| rule.rule_code == rule_code && rule.is_active)
    }
}

fn rule(
    rule_code: &str,
    rule_name: &str,
    rule_type: &str,
    module: Option<&str>,
    description: &str,
    severity: Severity,
) -> ValidationRule {
    ValidationRule {
        rule_code: rule_code.to_string(),
        rule_name: rule_name.to_string(),
        rule_type: rule_type.to_string(),
        module: module.map(ToString::to_string),
        description: description.to_string(),
        severity,
        is_active: true,
    }
}

pub fn builtin_rules() -> Vec<ValidationRule> {
    vec![
        rule(
            RULE_YEARLY_COMPARISON,
            "Year-over-year anomaly",
            "trend",
            None,
            "Flags excessive change, negative values, drops to zero and sudden growth against the prior reporting year",
            Severity::Warning,
        ),
        rule(
            RULE_CROSS_SOURCE,
            "Cross-source consistency",
            "cross_check",
            None,
            "Flags sources whose normalized value deviates more than the threshold from the group mean",
            Severity::Warning,
        ),
        rule(
            RULE_MISSING_FIELD,
            "Missing mandatory field",
            "completeness",
            None,
            "Raises an alert when a mandatory disclosure field is empty",
            Severity::Warning,
        ),
        rule(
            RULE_NEGATIVE_VALUE,
            "Negative quantity",
            "range",
            None,
            "Physical quantities (emissions, energy, water) cannot be negative",
            Severity::Error,
        ),
    ]
}
