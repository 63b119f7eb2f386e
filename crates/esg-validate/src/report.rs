//! JSON report output for a validation run.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use esg_model::{QualityScore, ValidationSummary};

const REPORT_SCHEMA: &str = "esg-disclosure-qa.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ValidationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub company_id: i64,
    pub year: i32,
    pub summary: ValidationSummary,
    pub scores: Vec<QualityScore>,
}

/// Write `validation_report.json` into `output_dir`, creating it if needed.
pub fn write_validation_report_json(
    output_dir: &Path,
    company_id: i64,
    year: i32,
    summary: &ValidationSummary,
    scores: &[QualityScore],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("validation_report.json");
    let payload = ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        company_id,
        year,
        summary: summary.clone(),
        scores: scores.to_vec(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
