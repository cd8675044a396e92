//! Quorum domain types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome condition of one reconcile invocation.
///
/// Not persisted anywhere; recomputed from live inputs every cycle and
/// handed back to the invoking controller, which translates it into retry
/// scheduling and user-visible status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuorumCondition {
    /// The workload is mid-rollout (ready != total); quorum was not evaluated.
    WorkloadNotReady,
    /// Healthy members below the majority threshold and no transition possible.
    QuorumNotReady,
    /// Quorum was lost; the cluster was shrunk to a single survivor.
    QuorumDowngraded,
    /// Quorum holds; the cluster was grown back to its desired size.
    QuorumUpgraded,
    /// Quorum holds and the cluster is at its desired size.
    QuorumReady,
}

impl fmt::Display for QuorumCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuorumCondition::WorkloadNotReady => "WorkloadNotReady",
            QuorumCondition::QuorumNotReady => "QuorumNotReady",
            QuorumCondition::QuorumDowngraded => "QuorumDowngraded",
            QuorumCondition::QuorumUpgraded => "QuorumUpgraded",
            QuorumCondition::QuorumReady => "QuorumReady",
        };
        f.write_str(s)
    }
}

/// Successful outcome of one reconcile invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    /// Condition signalled to the caller.
    pub condition: QuorumCondition,
    /// Resulting cluster size for that condition (healthy count for the
    /// steady states, the new member count after a downgrade/upgrade).
    pub size: u32,
}

/// Immutable cluster parameters for one reconcile invocation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClusterSpec {
    /// Cluster identity; keys the persisted roster record.
    pub name: String,
    /// Configured member count the cluster should run at.
    pub desired_replicas: u32,
    /// Inter-member port; stripped from roster addresses before probing.
    pub peering_port: u16,
}

/// Workload state as reported by the external workload controller.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct WorkloadStatus {
    /// Current total member count.
    pub replicas: u32,
    /// Members currently passing the workload controller's readiness gate.
    pub ready_replicas: u32,
}

impl WorkloadStatus {
    /// Invariant: ready <= total.
    pub fn new(replicas: u32, ready_replicas: u32) -> Self {
        debug_assert!(ready_replicas <= replicas);
        Self {
            replicas,
            ready_replicas,
        }
    }
}
