//! Reconcile error taxonomy.

use thiserror::Error;

use crate::quorum::condition::QuorumCondition;
use crate::roster::RosterError;
use crate::scaler::ScaleError;

/// Errors surfaced by one reconcile invocation.
///
/// Every error maps onto a condition and a resulting size, so the caller
/// can always recover the full `(condition, size, error)` triple via
/// [`QuorumError::condition`] and [`QuorumError::size`]. There are no
/// internal retries; the invoking scheduler re-drives the whole reconcile
/// on a fresh cycle.
#[derive(Debug, Error)]
pub enum QuorumError {
    /// Precondition failure: the workload is mid-rollout. Recoverable by
    /// retrying once the rollout settles.
    #[error("workload not ready: {ready}/{total} replicas ready")]
    WorkloadNotReady { ready: u32, total: u32 },

    /// The roster holds fewer members than the majority threshold demands.
    /// Unreachable for a well-formed roster; hit when the roster record is
    /// missing or unreadable and the cycle degrades to an empty roster.
    #[error("quorum has less than minimum {min_required} available nodes")]
    RosterShortfall { available: u32, min_required: u32 },

    /// Healthy members below majority with no further downgrade possible.
    /// Terminal failure state for this cycle.
    #[error("quorum has {healthy} healthy nodes, minimum required {min_required}")]
    QuorumInsufficient { healthy: u32, min_required: u32 },

    /// Roster resize failed; the cycle's transition is aborted and the
    /// state re-evaluated on the next invocation.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// Replica-count write failed; the cycle's transition is aborted.
    #[error(transparent)]
    Scale(#[from] ScaleError),
}

impl QuorumError {
    /// Condition signalled alongside this error.
    pub fn condition(&self) -> QuorumCondition {
        match self {
            QuorumError::WorkloadNotReady { .. } => QuorumCondition::WorkloadNotReady,
            QuorumError::RosterShortfall { .. }
            | QuorumError::QuorumInsufficient { .. }
            | QuorumError::Roster(_)
            | QuorumError::Scale(_) => QuorumCondition::QuorumNotReady,
        }
    }

    /// Resulting size reported alongside this error.
    pub fn size(&self) -> u32 {
        match self {
            QuorumError::RosterShortfall { available, .. } => *available,
            QuorumError::QuorumInsufficient { healthy, .. } => *healthy,
            _ => 0,
        }
    }
}
