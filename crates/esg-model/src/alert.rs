//! Missing-data alerts.

use serde::{Deserialize, Serialize};

use crate::status::{AlertStatus, ImportanceLevel};

/// A persisted alert for an empty mandatory field. At most one active alert
/// exists per (company, module, field); re-running the tracker against an
/// already-flagged field is a no-op. Resolution is an explicit operator
/// action and is never inferred from the field becoming populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingDataAlert {
    pub company_id: i64,
    pub module: String,
    pub field: String,
    pub description: String,
    pub importance: ImportanceLevel,
    pub status: AlertStatus,
    /// RFC 3339 creation timestamp. Not touched on re-runs.
    pub created_at: String,
    pub resolved_at: Option<String>,
}

/// One empty mandatory field, as reported by a tracker pass. Returned for
/// every empty field whether or not an alert already existed for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingFieldFinding {
    pub field: String,
    pub description: String,
    pub importance: ImportanceLevel,
    /// False when an active alert for this field already existed.
    pub newly_flagged: bool,
}
