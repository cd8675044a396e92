//! TOML-file roster persistence.
//!
//! One file holds every cluster's record under `[clusters]`, mapping
//! cluster id to the comma-separated address list:
//!
//! ```toml
//! [clusters]
//! main = "main-0.main-peers:8107,main-1.main-peers:8107"
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::roster::store::{AddressTemplate, RosterError, RosterStore};
use crate::roster::Roster;

#[derive(Debug, Default, Serialize, Deserialize)]
struct RosterFile {
    #[serde(default)]
    clusters: BTreeMap<String, String>,
}

/// File-backed roster store.
///
/// Plain read-modify-write per call; safe only under the external
/// single-writer-per-key guarantee. An environment without that guarantee
/// needs versioned writes instead.
#[derive(Debug, Clone)]
pub struct FileRosterStore {
    path: PathBuf,
    template: AddressTemplate,
}

impl FileRosterStore {
    pub fn new(path: PathBuf, template: AddressTemplate) -> Self {
        Self { path, template }
    }

    /// Read the record file. `Ok(None)` means the file does not exist yet;
    /// a corrupt or otherwise unreadable file is an error, never an empty
    /// record — the file is shared across clusters and rewriting it from
    /// scratch would drop every other cluster's roster.
    async fn read_file(&self) -> Result<Option<RosterFile>, RosterError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RosterError::Unavailable(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        let file = toml::from_str(&raw)
            .map_err(|e| RosterError::Unavailable(format!("{}: {}", self.path.display(), e)))?;
        Ok(Some(file))
    }

    async fn write_file(&self, file: &RosterFile) -> Result<(), RosterError> {
        let raw = toml::to_string_pretty(file).map_err(|e| RosterError::Persist(e.to_string()))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| RosterError::Persist(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl RosterStore for FileRosterStore {
    async fn get(&self, cluster: &str) -> Result<Roster, RosterError> {
        let file = self.read_file().await?.ok_or_else(|| {
            RosterError::Unavailable(format!("{}: no such file", self.path.display()))
        })?;
        let record = file.clusters.get(cluster).ok_or_else(|| {
            RosterError::Unavailable(format!("no roster record for cluster {}", cluster))
        })?;
        Ok(Roster::parse(record))
    }

    async fn resize(&self, cluster: &str, desired: u32) -> Result<Roster, RosterError> {
        // Only a file that does not exist yet starts a fresh record; a
        // corrupt or unreadable file aborts the transition instead.
        let mut file = self.read_file().await?.unwrap_or_default();
        let mut roster = file
            .clusters
            .get(cluster)
            .map(|record| Roster::parse(record))
            .unwrap_or_default();
        roster.resize_with(desired as usize, |index| self.template.mint(cluster, index));
        file.clusters.insert(cluster.to_string(), roster.to_wire());
        self.write_file(&file).await?;
        Ok(roster)
    }
}
