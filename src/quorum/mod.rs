//! Quorum decision subsystem.
//!
//! # Data Flow
//! ```text
//! (ClusterSpec, WorkloadStatus) supplied per invocation
//!     → controller.rs (readiness precondition)
//!     → RosterStore::get (persisted member list)
//!     → majority.rs (threshold for roster size)
//!     → evaluator.rs (bounded fan-out over health probes)
//!     → transition: downgrade / upgrade / steady state
//!     → RosterStore::resize + ReplicaScaler::set_replicas on a change
//!     → (QuorumCondition, size, error) back to the caller
//! ```
//!
//! # Design Decisions
//! - Quorum loss shrinks to a single survivor rather than leaving a
//!   minority cluster split-brained
//! - No state persists between invocations; the roster is the only
//!   cross-cycle record and only resize mutates it
//! - Retry semantics live entirely in the invoking scheduler

pub mod condition;
pub mod controller;
pub mod error;
pub mod evaluator;
pub mod majority;

pub use condition::{ClusterSpec, QuorumCondition, Reconciliation, WorkloadStatus};
pub use controller::QuorumController;
pub use error::QuorumError;
pub use evaluator::{QuorumEvaluator, QuorumHealth};
