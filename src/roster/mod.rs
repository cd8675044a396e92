//! Cluster membership roster.
//!
//! # Data Flow
//! ```text
//! Persisted record (one per cluster id, comma-separated addresses)
//!     → store.rs (RosterStore trait: get / resize)
//!     → Roster (ordered address list, peering-port aware)
//!     → quorum evaluation probes each address
//!
//! On a scale decision:
//!     controller calls RosterStore::resize first
//!     → record truncated or extended and persisted
//!     → workload replica count written afterwards
//! ```
//!
//! # Design Decisions
//! - Roster is the only state crossing invocations; mutated only via resize
//! - No optimistic concurrency: relies on the scheduler's
//!   single-writer-per-key guarantee
//! - An empty record parses to an empty roster, not one empty address

pub mod file;
pub mod memory;
pub mod store;

pub use file::FileRosterStore;
pub use memory::InMemoryRosterStore;
pub use store::{AddressTemplate, RosterError, RosterStore};

/// Ordered list of member network addresses, each possibly carrying a
/// `:<peering_port>` suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster(Vec<String>);

impl Roster {
    pub fn new(addresses: Vec<String>) -> Self {
        Self(addresses)
    }

    /// Parse the comma-separated wire form.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Render back to the comma-separated wire form.
    pub fn to_wire(&self) -> String {
        self.0.join(",")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Truncate or extend to `desired` entries, minting new addresses
    /// with `mint(index)`.
    pub fn resize_with(&mut self, desired: usize, mint: impl Fn(usize) -> String) {
        if self.0.len() > desired {
            self.0.truncate(desired);
        } else {
            for index in self.0.len()..desired {
                self.0.push(mint(index));
            }
        }
    }
}
