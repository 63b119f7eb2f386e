//! Tests for esg-model types.

use esg_model::{
    MeasurementKind, QualityGrade, QualityScore, ValidationStatus, ValidationSummary,
};

#[test]
fn grade_thresholds() {
    assert_eq!(QualityGrade::from_score(98.0), QualityGrade::A);
    assert_eq!(QualityGrade::from_score(90.0), QualityGrade::A);
    assert_eq!(QualityGrade::from_score(89.9), QualityGrade::B);
    assert_eq!(QualityGrade::from_score(80.0), QualityGrade::B);
    assert_eq!(QualityGrade::from_score(70.0), QualityGrade::C);
    assert_eq!(QualityGrade::from_score(60.0), QualityGrade::D);
    assert_eq!(QualityGrade::from_score(59.9), QualityGrade::F);
    assert_eq!(QualityGrade::from_score(0.0), QualityGrade::F);
}

#[test]
fn measurement_kind_round_trips_through_parse() {
    for kind in [
        MeasurementKind::Energy,
        MeasurementKind::Water,
        MeasurementKind::Emissions,
        MeasurementKind::EnergyIntensity,
    ] {
        assert_eq!(MeasurementKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(MeasurementKind::parse("unknown"), None);
}

#[test]
fn quality_score_serializes() {
    let score = QualityScore {
        company_id: 1,
        module: "karbon".to_string(),
        year: 2024,
        completeness_score: 100.0,
        accuracy_score: 100.0,
        consistency_score: 100.0,
        timeliness_score: 80.0,
        overall_score: 98.0,
        error_count: 0,
        warning_count: 0,
        grade: QualityGrade::A,
    };
    let json = serde_json::to_string(&score).expect("serialize score");
    let round: QualityScore = serde_json::from_str(&json).expect("deserialize score");
    assert_eq!(round, score);
}

#[test]
fn summary_error_flag() {
    let mut summary = ValidationSummary::default();
    assert!(!summary.has_errors());
    summary.total_errors = 1;
    assert!(summary.has_errors());
}

#[test]
fn status_finding_classification() {
    assert!(ValidationStatus::Error.is_finding());
    assert!(ValidationStatus::Warning.is_finding());
    assert!(!ValidationStatus::Pass.is_finding());
}
