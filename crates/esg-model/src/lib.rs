#![deny(unsafe_code)]

pub mod alert;
pub mod comparison;
pub mod error;
pub mod measurement;
pub mod quality;
pub mod status;
pub mod summary;
pub mod validation;

pub use alert::{MissingDataAlert, MissingFieldFinding};
pub use comparison::{ComparisonOutcome, YearlyComparison};
pub use error::{EsgError, Result};
pub use measurement::{MeasurementKind, MetricValue};
pub use quality::{QualityGrade, QualityScore};
pub use status::{AlertStatus, ImportanceLevel, Severity, ValidationStatus};
pub use summary::{ModuleBreakdown, ValidationSummary};
pub use validation::{InconsistencyFinding, ValidationResult, ValidationRule};
