//! In-memory roster store.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::roster::store::{AddressTemplate, RosterError, RosterStore};
use crate::roster::Roster;

/// DashMap-backed store for tests and single-process deployments.
///
/// Records hold the same comma-separated wire form the file store
/// persists, so parse behavior is identical across implementations.
#[derive(Debug)]
pub struct InMemoryRosterStore {
    records: DashMap<String, String>,
    template: AddressTemplate,
}

impl InMemoryRosterStore {
    pub fn new(template: AddressTemplate) -> Self {
        Self {
            records: DashMap::new(),
            template,
        }
    }

    /// Install a roster record, replacing any existing one.
    pub fn seed(&self, cluster: &str, roster: &Roster) {
        self.records.insert(cluster.to_string(), roster.to_wire());
    }
}

#[async_trait]
impl RosterStore for InMemoryRosterStore {
    async fn get(&self, cluster: &str) -> Result<Roster, RosterError> {
        let record = self.records.get(cluster).ok_or_else(|| {
            RosterError::Unavailable(format!("no roster record for cluster {}", cluster))
        })?;
        Ok(Roster::parse(record.value()))
    }

    async fn resize(&self, cluster: &str, desired: u32) -> Result<Roster, RosterError> {
        let mut roster = self
            .records
            .get(cluster)
            .map(|record| Roster::parse(record.value()))
            .unwrap_or_default();
        roster.resize_with(desired as usize, |index| self.template.mint(cluster, index));
        self.records.insert(cluster.to_string(), roster.to_wire());
        Ok(roster)
    }
}
