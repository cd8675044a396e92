//! Roster-wide health evaluation.

use futures_util::stream::{self, StreamExt};

use crate::health::HealthProbe;
use crate::observability::metrics;
use crate::quorum::majority;
use crate::roster::Roster;

/// Aggregate health of a roster at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuorumHealth {
    /// Majority threshold for the probed roster size.
    pub min_required: u32,
    /// Members that answered healthy within the probe budget.
    pub healthy: u32,
}

/// Fans the health probe out over a roster and tallies the result.
///
/// Probes run concurrently with a bounded fan-out so total latency is
/// bounded by `ceil(n / max_concurrency)` probe budgets rather than
/// growing linearly with roster size. The tally is order-insensitive.
#[derive(Debug, Clone)]
pub struct QuorumEvaluator {
    probe: HealthProbe,
    max_concurrency: usize,
}

impl QuorumEvaluator {
    pub fn new(probe: HealthProbe, max_concurrency: usize) -> Self {
        Self {
            probe,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Probe every roster member and count the healthy ones.
    ///
    /// Never fails: an individual probe failure classifies that member
    /// unhealthy and the tally completes regardless.
    pub async fn evaluate(&self, roster: &Roster, peering_port: u16) -> QuorumHealth {
        let min_required = majority::min_required(roster.len()) as u32;

        let healthy = stream::iter(roster.iter())
            .map(|address| async move {
                let healthy = self.probe.probe(address, peering_port).await;
                metrics::record_node_health(address, healthy);
                healthy
            })
            .buffer_unordered(self.max_concurrency)
            .fold(0u32, |tally, healthy| async move {
                tally + u32::from(healthy)
            })
            .await;

        QuorumHealth {
            min_required,
            healthy,
        }
    }
}
