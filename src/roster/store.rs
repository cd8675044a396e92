//! Roster persistence contract.

use async_trait::async_trait;
use thiserror::Error;

use crate::roster::Roster;

/// Errors from the roster backing store.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The backing record could not be read.
    #[error("roster unavailable: {0}")]
    Unavailable(String),

    /// Persisting the updated record failed.
    #[error("roster write failed: {0}")]
    Persist(String),
}

/// Persisted cluster membership, keyed by cluster identity.
///
/// The controller is the only writer, and the invoking scheduler
/// guarantees at most one concurrent invocation per cluster, so
/// implementations may use plain read-modify-write.
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Fetch the persisted roster for `cluster`.
    async fn get(&self, cluster: &str) -> Result<Roster, RosterError>;

    /// Truncate or extend the persisted roster to `desired` entries,
    /// persist it, and return the result. Always called before the
    /// workload scale write so the roster view never lags the scale
    /// directive.
    async fn resize(&self, cluster: &str, desired: u32) -> Result<Roster, RosterError>;
}

#[async_trait]
impl<T: RosterStore + ?Sized> RosterStore for std::sync::Arc<T> {
    async fn get(&self, cluster: &str) -> Result<Roster, RosterError> {
        (**self).get(cluster).await
    }

    async fn resize(&self, cluster: &str, desired: u32) -> Result<Roster, RosterError> {
        (**self).resize(cluster, desired).await
    }
}

/// Mints member addresses when a roster grows.
///
/// `{cluster}` and `{index}` in the pattern are substituted and the
/// peering port appended, yielding the stable per-member DNS names the
/// workload controller assigns (headless-service style).
#[derive(Debug, Clone)]
pub struct AddressTemplate {
    pattern: String,
    peering_port: u16,
}

impl AddressTemplate {
    pub const DEFAULT_PATTERN: &'static str = "{cluster}-{index}.{cluster}-peers";

    pub fn new(pattern: impl Into<String>, peering_port: u16) -> Self {
        Self {
            pattern: pattern.into(),
            peering_port,
        }
    }

    pub fn mint(&self, cluster: &str, index: usize) -> String {
        let host = self
            .pattern
            .replace("{cluster}", cluster)
            .replace("{index}", &index.to_string());
        format!("{}:{}", host, self.peering_port)
    }
}
