//! Missing mandatory-field tracking.

use chrono::Utc;

use esg_model::{AlertStatus, MissingDataAlert, MissingFieldFinding, Result};
use esg_standards::ModuleManifests;

use crate::sources::CompanyFieldReader;
use crate::store::ValidationStore;

/// Walks a module's manifest, probes each mandatory field for emptiness and
/// raises at most one active alert per field. Populated fields never resolve
/// anything; resolution stays an operator action on the store.
pub struct MissingDataTracker<'a> {
    manifests: &'a ModuleManifests,
}

impl<'a> MissingDataTracker<'a> {
    pub fn new(manifests: &'a ModuleManifests) -> Self {
        Self { manifests }
    }

    /// One tracker pass over (company, module). Returns a finding for every
    /// empty mandatory field, flagged `newly_flagged` only when this pass
    /// created the alert.
    pub fn track(
        &self,
        store: &dyn ValidationStore,
        fields: &dyn CompanyFieldReader,
        company_id: i64,
        module: &str,
    ) -> Result<Vec<MissingFieldFinding>> {
        let mut findings = Vec::new();
        for spec in self.manifests.for_module(module) {
            if !fields.is_empty(company_id, &spec.table, &spec.field) {
                continue;
            }
            let created = store.create_alert_if_absent(MissingDataAlert {
                company_id,
                module: module.to_string(),
                field: spec.field.clone(),
                description: spec.description.clone(),
                importance: spec.importance,
                status: AlertStatus::Active,
                created_at: Utc::now().to_rfc3339(),
                resolved_at: None,
            })?;
            if created {
                tracing::info!(
                    company_id,
                    module,
                    field = %spec.field,
                    importance = ?spec.importance,
                    "missing mandatory field flagged"
                );
            }
            findings.push(MissingFieldFinding {
                field: spec.field.clone(),
                description: spec.description.clone(),
                importance: spec.importance,
                newly_flagged: created,
            });
        }
        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::store::MemoryStore;

    /// Everything is empty except the keys listed as populated.
    struct FixtureFields {
        populated: BTreeSet<(i64, String, String)>,
    }

    impl FixtureFields {
        fn new(populated: &[(i64, &str, &str)]) -> Self {
            Self {
                populated: populated
                    .iter()
                    .map(|(c, t, f)| (*c, t.to_string(), f.to_string()))
                    .collect(),
            }
        }
    }

    impl CompanyFieldReader for FixtureFields {
        fn is_empty(&self, company_id: i64, table: &str, field: &str) -> bool {
            !self
                .populated
                .contains(&(company_id, table.to_string(), field.to_string()))
        }
    }

    #[test]
    fn second_pass_does_not_duplicate_alerts() {
        let manifests = ModuleManifests::default();
        let tracker = MissingDataTracker::new(&manifests);
        let store = MemoryStore::new();
        let fields = FixtureFields::new(&[(1, "carbon_emissions", "scope1_emissions")]);

        let first = tracker.track(&store, &fields, 1, "karbon").expect("track");
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].field, "scope2_emissions");
        assert!(first[0].newly_flagged);

        let second = tracker.track(&store, &fields, 1, "karbon").expect("track");
        assert_eq!(second.len(), 1);
        assert!(!second[0].newly_flagged);
        assert_eq!(store.active_alert_count(1, Some("karbon")).expect("count"), 1);
    }

    #[test]
    fn populated_fields_do_not_resolve_alerts() {
        let manifests = ModuleManifests::default();
        let tracker = MissingDataTracker::new(&manifests);
        let store = MemoryStore::new();

        let empty = FixtureFields::new(&[]);
        tracker.track(&store, &empty, 1, "enerji").expect("track");
        assert_eq!(store.active_alert_count(1, Some("enerji")).expect("count"), 1);

        // The field is filled in later; the alert stays active.
        let filled = FixtureFields::new(&[(1, "energy_data", "total_consumption")]);
        let findings = tracker.track(&store, &filled, 1, "enerji").expect("track");
        assert!(findings.is_empty());
        assert_eq!(store.active_alert_count(1, Some("enerji")).expect("count"), 1);
    }

    #[test]
    fn unknown_module_yields_no_findings() {
        let manifests = ModuleManifests::default();
        let tracker = MissingDataTracker::new(&manifests);
        let store = MemoryStore::new();
        let fields = FixtureFields::new(&[]);
        let findings = tracker.track(&store, &fields, 1, "bilinmeyen").expect("track");
        assert!(findings.is_empty());
    }
}
