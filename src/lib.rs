//! Quorum maintenance for a replicated node set.
//!
//! Decides every cycle whether a cluster has enough healthy members to
//! operate, and drives corrective scaling: shrink to a single surviving
//! member on quorum loss, grow back to the desired size once quorum is
//! restored.

pub mod config;
pub mod health;
pub mod observability;
pub mod quorum;
pub mod roster;
pub mod scaler;

pub use config::WardenConfig;
pub use quorum::{
    ClusterSpec, QuorumCondition, QuorumController, QuorumError, Reconciliation, WorkloadStatus,
};
