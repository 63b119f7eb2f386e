//! Data quality and consistency validation for sustainability disclosures.
//!
//! The engine normalizes heterogeneous metric values into canonical units,
//! compares them year-over-year and across independent reporting sources,
//! tracks missing mandatory fields and folds everything into a composite
//! quality score per module. [`ValidationService`] is the entry point;
//! the individual checkers are public for callers that need only one.

#![deny(unsafe_code)]

pub mod compare;
pub mod consistency;
pub mod missing;
pub mod normalize;
pub mod report;
pub mod score;
pub mod service;
pub mod sources;
pub mod store;

pub use crate::compare::YearlyComparator;
pub use crate::consistency::ConsistencyChecker;
pub use crate::missing::MissingDataTracker;
pub use crate::normalize::{Normalizer, numeric_value};
pub use crate::report::{ValidationReportPayload, write_validation_report_json};
pub use crate::score::QualityScorer;
pub use crate::service::{TrackedField, ValidationService};
pub use crate::sources::{CompanyFieldReader, MapMetricReader, MetricReader, SourceRegistry};
pub use crate::store::{MemoryStore, ValidationStore};
