//! Per-module required-field manifests.
//!
//! Each disclosure module declares which fields a company must populate
//! before a submission pass. The built-in manifests cover the carbon, energy
//! and water modules; deployments extend them at startup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use esg_model::ImportanceLevel;

/// One mandatory field: where it lives and how important its absence is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredFieldSpec {
    pub field: String,
    /// Source table/store the emptiness probe queries.
    pub table: String,
    pub importance: ImportanceLevel,
    pub description: String,
}

impl RequiredFieldSpec {
    fn new(field: &str, table: &str, importance: ImportanceLevel, description: &str) -> Self {
        Self {
            field: field.to_string(),
            table: table.to_string(),
            importance,
            description: description.to_string(),
        }
    }
}

/// Static manifest registry, keyed by module name.
#[derive(Debug, Clone)]
pub struct ModuleManifests {
    modules: BTreeMap<String, Vec<RequiredFieldSpec>>,
}

impl Default for ModuleManifests {
    fn default() -> Self {
        let mut modules = BTreeMap::new();
        modules.insert(
            "karbon".to_string(),
            vec![
                RequiredFieldSpec::new(
                    "scope1_emissions",
                    "carbon_emissions",
                    ImportanceLevel::High,
                    "Scope 1 emissions",
                ),
                RequiredFieldSpec::new(
                    "scope2_emissions",
                    "carbon_emissions",
                    ImportanceLevel::High,
                    "Scope 2 emissions",
                ),
            ],
        );
        modules.insert(
            "enerji".to_string(),
            vec![RequiredFieldSpec::new(
                "total_consumption",
                "energy_data",
                ImportanceLevel::High,
                "Total energy consumption",
            )],
        );
        modules.insert(
            "su".to_string(),
            vec![RequiredFieldSpec::new(
                "total_withdrawal",
                "water_data",
                ImportanceLevel::High,
                "Total water withdrawal",
            )],
        );
        Self { modules }
    }
}

impl ModuleManifests {
    pub fn empty() -> Self {
        Self {
            modules: BTreeMap::new(),
        }
    }

    /// Required fields for a module; unknown modules have none.
    pub fn for_module(&self, module: &str) -> &[RequiredFieldSpec] {
        self.modules
            .get(module)
            .map(|fields| fields.as_slice())
            .unwrap_or(&[])
    }

    /// Register or replace a module manifest.
    pub fn insert(&mut self, module: &str, fields: Vec<RequiredFieldSpec>) {
        self.modules.insert(module.to_string(), fields);
    }

    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_manifests() {
        let manifests = ModuleManifests::default();
        assert_eq!(manifests.for_module("karbon").len(), 2);
        assert_eq!(manifests.for_module("enerji").len(), 1);
        assert_eq!(manifests.for_module("su").len(), 1);
        assert!(manifests.for_module("bilinmeyen").is_empty());
    }

    #[test]
    fn insert_replaces_manifest() {
        let mut manifests = ModuleManifests::empty();
        manifests.insert(
            "atik",
            vec![RequiredFieldSpec::new(
                "total_waste",
                "waste_data",
                ImportanceLevel::Medium,
                "Total waste generated",
            )],
        );
        assert_eq!(manifests.for_module("atik").len(), 1);
        assert_eq!(manifests.modules().collect::<Vec<_>>(), vec!["atik"]);
    }
}
