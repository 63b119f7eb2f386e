//! Unit normalization tables.
//!
//! Every measurement kind has an ordered list of (unit token → scale factor)
//! pairs, relative to the kind's canonical unit (energy → MWh, water → m³,
//! emissions → tCO2e). The engine scans a free-text value for the **first**
//! token that occurs as a substring, in table order; the order below is
//! therefore load-bearing and must not be sorted or deduplicated.

use std::path::Path;

use serde::{Deserialize, Serialize};

use esg_model::MeasurementKind;

use crate::error::StandardsError;

/// One unit token and its multiplicative factor toward the canonical unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitScale {
    pub token: String,
    pub scale: f64,
}

impl UnitScale {
    fn new(token: &str, scale: f64) -> Self {
        Self {
            token: token.to_string(),
            scale,
        }
    }
}

/// Optional on-disk override: each kind that appears
/// in the file replaces the built-in table for that kind; absent kinds keep
/// their defaults.
#[derive(Debug, Default, Deserialize)]
struct NormalizationFile {
    #[serde(default)]
    energy: Vec<UnitScale>,
    #[serde(default)]
    water: Vec<UnitScale>,
    #[serde(default)]
    emissions: Vec<UnitScale>,
}

/// Immutable unit→scale configuration, constructed once at startup and
/// passed by reference into the normalizer.
#[derive(Debug, Clone)]
pub struct NormalizationConfig {
    energy: Vec<UnitScale>,
    water: Vec<UnitScale>,
    emissions: Vec<UnitScale>,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            energy: vec![
                UnitScale::new("mwh", 1.0),
                UnitScale::new("kwh", 0.001),
                UnitScale::new("gj", 1.0 / 3.6),
            ],
            water: vec![
                UnitScale::new("m3", 1.0),
                UnitScale::new("m^3", 1.0),
                UnitScale::new("litre", 0.001),
                UnitScale::new("liter", 0.001),
                UnitScale::new("l", 0.001),
            ],
            emissions: vec![
                UnitScale::new("tco2e", 1.0),
                UnitScale::new("ton", 1.0),
                UnitScale::new("tonne", 1.0),
                UnitScale::new("kgco2e", 0.001),
                UnitScale::new("kg", 0.001),
                UnitScale::new("kt", 1000.0),
                UnitScale::new("mt", 1_000_000.0),
            ],
        }
    }
}

impl NormalizationConfig {
    /// Load overrides from a TOML file, falling back to the built-in tables
    /// for kinds the file does not mention. A missing file is not an error.
    pub fn load_or_default(path: &Path) -> Result<Self, StandardsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents =
            std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        let file: NormalizationFile =
            toml::from_str(&contents).map_err(|e| StandardsError::Toml {
                path: path.to_path_buf(),
                source: e,
            })?;
        let mut config = Self::default();
        if !file.energy.is_empty() {
            config.energy = file.energy;
        }
        if !file.water.is_empty() {
            config.water = file.water;
        }
        if !file.emissions.is_empty() {
            config.emissions = file.emissions;
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), StandardsError> {
        for entry in self.energy.iter().chain(&self.water).chain(&self.emissions) {
            if entry.token.trim().is_empty() {
                return Err(StandardsError::InvalidConfig {
                    message: "empty unit token".to_string(),
                });
            }
            if !entry.scale.is_finite() || entry.scale <= 0.0 {
                return Err(StandardsError::InvalidConfig {
                    message: format!("non-positive scale for token '{}'", entry.token),
                });
            }
        }
        Ok(())
    }

    /// The ordered table for a kind. Intensity values are kind-agnostic
    /// ratios and have no unit table.
    pub fn table(&self, kind: MeasurementKind) -> &[UnitScale] {
        match kind {
            MeasurementKind::Energy => &self.energy,
            MeasurementKind::Water => &self.water,
            MeasurementKind::Emissions => &self.emissions,
            MeasurementKind::EnergyIntensity => &[],
        }
    }

    /// Scale factor for the first token found as a substring of `text`,
    /// scanning in table order. `None` when no token matches (the caller
    /// assumes the value is already canonical).
    pub fn scale_for(&self, kind: MeasurementKind, text: &str) -> Option<f64> {
        self.table(kind)
            .iter()
            .find(|entry| text.contains(entry.token.as_str()))
            .map(|entry| entry.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_tables_cover_all_kinds() {
        let config = NormalizationConfig::default();
        assert_eq!(config.table(MeasurementKind::Energy).len(), 3);
        assert_eq!(config.table(MeasurementKind::Water).len(), 5);
        assert_eq!(config.table(MeasurementKind::Emissions).len(), 7);
        assert!(config.table(MeasurementKind::EnergyIntensity).is_empty());
    }

    #[test]
    fn first_match_wins_in_table_order() {
        let config = NormalizationConfig::default();
        // "tonne" contains "ton", which precedes it in the table; both scale
        // to 1.0 so the ambiguity is harmless, but the order is fixed.
        assert_eq!(config.scale_for(MeasurementKind::Emissions, "12 tonne"), Some(1.0));
        // "kgco2e" is found before the bare "kg" token.
        assert_eq!(
            config.scale_for(MeasurementKind::Emissions, "500kgco2e"),
            Some(0.001)
        );
    }

    #[test]
    fn unmapped_token_yields_none() {
        let config = NormalizationConfig::default();
        assert_eq!(config.scale_for(MeasurementKind::Energy, "123 foo"), None);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = NormalizationConfig::load_or_default(Path::new("/nonexistent/units.toml"))
            .expect("defaults");
        assert_eq!(config.scale_for(MeasurementKind::Energy, "5 kwh"), Some(0.001));
    }

    #[test]
    fn file_overrides_only_named_kinds() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "[[energy]]\ntoken = \"twh\"\nscale = 1000000.0\n"
        )
        .expect("write config");
        let config =
            NormalizationConfig::load_or_default(file.path()).expect("load config");
        assert_eq!(config.scale_for(MeasurementKind::Energy, "1 twh"), Some(1_000_000.0));
        assert_eq!(config.scale_for(MeasurementKind::Energy, "1 kwh"), None);
        // Water keeps the built-in table.
        assert_eq!(config.scale_for(MeasurementKind::Water, "10 litre"), Some(0.001));
    }

    #[test]
    fn invalid_scale_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[[water]]\ntoken = \"m3\"\nscale = 0.0\n").expect("write config");
        let err = NormalizationConfig::load_or_default(file.path());
        assert!(matches!(err, Err(StandardsError::InvalidConfig { .. })));
    }
}
