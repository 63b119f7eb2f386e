use serde::{Deserialize, Serialize};

/// Severity attached to a validation rule or finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// Outcome of a single validation check, as stored in the result history.
///
/// The serialized tokens (`hata`, `uyari`, `gecerli`) are the values the
/// disclosure store has always used; downstream dashboards query them
/// directly, so they are part of the data contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationStatus {
    #[serde(rename = "hata")]
    Error,
    #[serde(rename = "uyari")]
    Warning,
    #[serde(rename = "gecerli")]
    Pass,
}

impl ValidationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Error => "hata",
            ValidationStatus::Warning => "uyari",
            ValidationStatus::Pass => "gecerli",
        }
    }

    pub fn is_finding(&self) -> bool {
        matches!(self, ValidationStatus::Error | ValidationStatus::Warning)
    }
}

impl From<Severity> for ValidationStatus {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => ValidationStatus::Error,
            Severity::Warning => ValidationStatus::Warning,
        }
    }
}

/// Importance attached to a required disclosure field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportanceLevel {
    #[serde(rename = "yuksek")]
    High,
    #[serde(rename = "orta")]
    Medium,
    #[serde(rename = "dusuk")]
    Low,
}

impl ImportanceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportanceLevel::High => "yuksek",
            ImportanceLevel::Medium => "orta",
            ImportanceLevel::Low => "dusuk",
        }
    }
}

/// Lifecycle of a missing-data alert. Alerts stay `aktif` until an operator
/// explicitly resolves them; re-running the tracker never flips this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    #[serde(rename = "aktif")]
    Active,
    #[serde(rename = "resolved")]
    Resolved,
}
