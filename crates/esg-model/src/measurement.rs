//! Measurement kinds and raw metric values.

use serde::{Deserialize, Serialize};

/// Category of quantity a metric belongs to. Selects which unit table the
/// normalizer applies and which canonical unit the result is expressed in:
/// energy in MWh, water in m³, emissions in tCO2e. Intensity values are
/// kind-agnostic ratios and are never rescaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    Energy,
    Water,
    Emissions,
    EnergyIntensity,
}

impl MeasurementKind {
    /// Returns the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementKind::Energy => "energy",
            MeasurementKind::Water => "water",
            MeasurementKind::Emissions => "emissions",
            MeasurementKind::EnergyIntensity => "energy_intensity",
        }
    }

    /// Parse a measurement kind from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "energy" => Some(MeasurementKind::Energy),
            "water" => Some(MeasurementKind::Water),
            "emissions" => Some(MeasurementKind::Emissions),
            "energy_intensity" | "intensity" => Some(MeasurementKind::EnergyIntensity),
            _ => None,
        }
    }

    /// Canonical unit label, for messages and report payloads.
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            MeasurementKind::Energy => "MWh",
            MeasurementKind::Water => "m3",
            MeasurementKind::Emissions => "tCO2e",
            MeasurementKind::EnergyIntensity => "",
        }
    }
}

/// A raw value as returned by a collaborating metric store. Framework
/// indicator responses are free text ("250000 kg"); internal stores return
/// plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}
