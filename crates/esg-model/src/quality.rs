//! Composite quality scores.

use serde::{Deserialize, Serialize};

/// Letter grade derived from the composite 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityGrade {
    A,
    B,
    C,
    D,
    F,
}

impl QualityGrade {
    /// Grade thresholds: ≥90 A, ≥80 B, ≥70 C, ≥60 D, else F.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            QualityGrade::A
        } else if score >= 80.0 {
            QualityGrade::B
        } else if score >= 70.0 {
            QualityGrade::C
        } else if score >= 60.0 {
            QualityGrade::D
        } else {
            QualityGrade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityGrade::A => "A",
            QualityGrade::B => "B",
            QualityGrade::C => "C",
            QualityGrade::D => "D",
            QualityGrade::F => "F",
        }
    }
}

/// Current-state quality snapshot for one (company, module, year).
///
/// Unlike the comparison and result history, this row is replaced on every
/// recomputation: the key is unique and scoring is an idempotent upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    pub company_id: i64,
    pub module: String,
    pub year: i32,
    pub completeness_score: f64,
    pub accuracy_score: f64,
    pub consistency_score: f64,
    pub timeliness_score: f64,
    pub overall_score: f64,
    pub error_count: u64,
    pub warning_count: u64,
    pub grade: QualityGrade,
}
