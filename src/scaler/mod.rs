//! Workload scaling seam.
//!
//! # Responsibilities
//! - Contract for writing the desired replica count to the external
//!   workload controller
//! - HTTP implementation against the controller's scale endpoint
//!
//! # Design Decisions
//! - Writes are idempotent: already-at-target is a success with no write
//! - Failures are reported, never retried here; the next reconcile cycle
//!   re-evaluates from scratch

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

pub use http::HttpWorkloadClient;

/// Errors from the workload controller.
#[derive(Debug, Error)]
pub enum ScaleError {
    /// Request never completed (connect failure, timeout).
    #[error("workload controller request failed: {0}")]
    Transport(String),

    /// Controller answered with a non-success status.
    #[error("workload controller returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Controller answered, but the body did not parse.
    #[error("workload controller response malformed: {0}")]
    Malformed(String),
}

/// Adjusts the desired member count of the underlying workload.
#[async_trait]
pub trait ReplicaScaler: Send + Sync {
    /// Set the workload's desired replica count. Implementations skip the
    /// write when the workload is already at `desired` and return success.
    async fn set_replicas(&self, cluster: &str, desired: u32) -> Result<(), ScaleError>;
}

#[async_trait]
impl<T: ReplicaScaler + ?Sized> ReplicaScaler for std::sync::Arc<T> {
    async fn set_replicas(&self, cluster: &str, desired: u32) -> Result<(), ScaleError> {
        (**self).set_replicas(cluster, desired).await
    }
}
