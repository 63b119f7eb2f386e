//! Unit normalization for heterogeneous metric values.
//!
//! Disclosure frameworks capture the same quantity as plain numbers or as
//! free text ("1,200,000 kWh", "250000 kg CO2e"). The normalizer converts
//! both into the measurement kind's canonical unit so sources can be
//! compared. Parsing is lenient by contract: an unmapped unit token means
//! the value is assumed canonical (scale 1.0); a value with no numeric
//! literal at all yields `None`, which callers must treat as "skip this
//! source", never as zero.

use std::sync::LazyLock;

use regex::Regex;

use esg_model::{MeasurementKind, MetricValue};
use esg_standards::NormalizationConfig;

static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?[0-9]*\.?[0-9]+").expect("numeric literal pattern is valid")
});

/// Stateless normalizer over an immutable unit table.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    config: &'a NormalizationConfig,
}

impl<'a> Normalizer<'a> {
    pub fn new(config: &'a NormalizationConfig) -> Self {
        Self { config }
    }

    /// Normalize a raw value into the kind's canonical unit. Numeric inputs
    /// pass through unchanged for every kind, intensity included.
    pub fn normalize(&self, value: &MetricValue, kind: MeasurementKind) -> Option<f64> {
        match value {
            MetricValue::Number(n) => Some(*n),
            MetricValue::Text(text) => self.normalize_text(text, kind),
        }
    }

    fn normalize_text(&self, text: &str, kind: MeasurementKind) -> Option<f64> {
        let cleaned = text
            .trim()
            .to_lowercase()
            .replace(' ', "")
            .replace('\u{a0}', "")
            .replace(',', "");
        if cleaned.is_empty() {
            return None;
        }

        // Intensity values are kind-agnostic ratios: extract the number,
        // never rescale.
        let scale = if kind == MeasurementKind::EnergyIntensity {
            1.0
        } else {
            match self.config.scale_for(kind, &cleaned) {
                Some(scale) => scale,
                None => {
                    tracing::debug!(kind = kind.as_str(), value = %text, "no unit token matched, assuming canonical");
                    1.0
                }
            }
        };

        let literal = NUMERIC_LITERAL.find(&cleaned)?;
        let magnitude: f64 = literal.as_str().parse().ok()?;
        Some(magnitude * scale)
    }
}

/// Extract a bare numeric magnitude without unit scaling, for values read
/// from stores that are already canonical (prior-year lookups).
pub fn numeric_value(value: &MetricValue) -> Option<f64> {
    match value {
        MetricValue::Number(n) => Some(*n),
        MetricValue::Text(text) => {
            let cleaned = text
                .trim()
                .replace(' ', "")
                .replace('\u{a0}', "")
                .replace(',', "");
            let literal = NUMERIC_LITERAL.find(&cleaned)?;
            literal.as_str().parse().ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str, kind: MeasurementKind) -> Option<f64> {
        let config = NormalizationConfig::default();
        Normalizer::new(&config).normalize(&MetricValue::Text(text.to_string()), kind)
    }

    #[test]
    fn thousands_separators_and_units() {
        assert_eq!(normalize("1,200,000 kWh", MeasurementKind::Energy), Some(1200.0));
        assert_eq!(normalize("250000 kg", MeasurementKind::Emissions), Some(250.0));
    }

    #[test]
    fn non_breaking_space_is_stripped() {
        assert_eq!(
            normalize("1\u{a0}500 MWh", MeasurementKind::Energy),
            Some(1500.0)
        );
    }

    #[test]
    fn unmapped_token_assumes_canonical() {
        assert_eq!(normalize("120 units", MeasurementKind::Water), Some(120.0));
    }

    #[test]
    fn no_literal_yields_none() {
        assert_eq!(normalize("yok", MeasurementKind::Emissions), None);
        assert_eq!(normalize("", MeasurementKind::Energy), None);
        assert_eq!(normalize("   ", MeasurementKind::Energy), None);
    }

    #[test]
    fn numeric_passthrough_for_all_kinds() {
        let config = NormalizationConfig::default();
        let normalizer = Normalizer::new(&config);
        for kind in [
            MeasurementKind::Energy,
            MeasurementKind::Water,
            MeasurementKind::Emissions,
            MeasurementKind::EnergyIntensity,
        ] {
            assert_eq!(normalizer.normalize(&MetricValue::Number(42.5), kind), Some(42.5));
        }
    }

    #[test]
    fn intensity_text_is_never_rescaled() {
        // "kwh" occurs in the text but intensity has no unit table.
        assert_eq!(
            normalize("3.2 kwh/ton", MeasurementKind::EnergyIntensity),
            Some(3.2)
        );
    }

    #[test]
    fn signed_decimal_literals() {
        assert_eq!(normalize("-12.5 tco2e", MeasurementKind::Emissions), Some(-12.5));
        assert_eq!(normalize("+8 m3", MeasurementKind::Water), Some(8.0));
        assert_eq!(normalize(".5 mwh", MeasurementKind::Energy), Some(0.5));
    }

    #[test]
    fn first_literal_wins() {
        assert_eq!(
            normalize("between 100 and 200 mwh", MeasurementKind::Energy),
            Some(100.0)
        );
    }

    #[test]
    fn bare_numeric_value_extraction() {
        assert_eq!(numeric_value(&MetricValue::Number(7.0)), Some(7.0));
        assert_eq!(
            numeric_value(&MetricValue::Text("1,250".to_string())),
            Some(1250.0)
        );
        assert_eq!(numeric_value(&MetricValue::Text("n/a".to_string())), None);
    }
}
