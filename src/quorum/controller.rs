//! The reconcile-once state machine.

use crate::observability::metrics;
use crate::quorum::condition::{ClusterSpec, QuorumCondition, Reconciliation, WorkloadStatus};
use crate::quorum::error::QuorumError;
use crate::quorum::evaluator::QuorumEvaluator;
use crate::quorum::majority;
use crate::roster::{Roster, RosterStore};
use crate::scaler::ReplicaScaler;

/// Orchestrates roster fetch, quorum evaluation and the resulting scale
/// directive for one invocation.
///
/// Holds no state across invocations; every call recomputes from the
/// supplied spec/status, the persisted roster and live probes, so it can
/// be driven by any scheduling harness. The invoking scheduler must
/// guarantee at most one concurrent invocation per cluster identity.
pub struct QuorumController<S, R> {
    store: S,
    scaler: R,
    evaluator: QuorumEvaluator,
}

impl<S: RosterStore, R: ReplicaScaler> QuorumController<S, R> {
    pub fn new(store: S, scaler: R, evaluator: QuorumEvaluator) -> Self {
        Self {
            store,
            scaler,
            evaluator,
        }
    }

    /// Run one reconcile cycle.
    ///
    /// Evaluated in order:
    /// 1. Workload mid-rollout ⇒ `WorkloadNotReady`, nothing else happens.
    /// 2. Roster smaller than its own majority threshold (degraded or
    ///    unreadable roster) ⇒ `QuorumNotReady`.
    /// 3. Quorum lost with more than one ready member ⇒ downgrade to a
    ///    single survivor (split-brain avoidance); already at one ⇒
    ///    `QuorumNotReady`.
    /// 4. Quorum held below desired size ⇒ upgrade back to desired;
    ///    otherwise `QuorumReady`.
    pub async fn reconcile(
        &self,
        spec: &ClusterSpec,
        status: &WorkloadStatus,
    ) -> Result<Reconciliation, QuorumError> {
        tracing::info!(cluster = %spec.name, "reconciling quorum");

        let result = self.reconcile_inner(spec, status).await;
        match &result {
            Ok(outcome) => {
                metrics::record_reconcile(outcome.condition);
                tracing::info!(
                    cluster = %spec.name,
                    condition = %outcome.condition,
                    size = outcome.size,
                    "reconciling quorum completed"
                );
            }
            Err(err) => {
                metrics::record_reconcile(err.condition());
                tracing::warn!(
                    cluster = %spec.name,
                    condition = %err.condition(),
                    size = err.size(),
                    error = %err,
                    "reconciling quorum completed"
                );
            }
        }
        result
    }

    async fn reconcile_inner(
        &self,
        spec: &ClusterSpec,
        status: &WorkloadStatus,
    ) -> Result<Reconciliation, QuorumError> {
        if status.ready_replicas != status.replicas {
            return Err(QuorumError::WorkloadNotReady {
                ready: status.ready_replicas,
                total: status.replicas,
            });
        }

        // A failed roster read degrades to an empty roster instead of
        // aborting; the shortfall check below then reports QuorumNotReady.
        let roster = match self.store.get(&spec.name).await {
            Ok(roster) => roster,
            Err(e) => {
                tracing::error!(cluster = %spec.name, error = %e, "unable to fetch roster");
                Roster::default()
            }
        };

        let available = roster.len() as u32;
        let min_required = majority::min_required(roster.len()) as u32;
        if available < min_required {
            return Err(QuorumError::RosterShortfall {
                available,
                min_required,
            });
        }

        let health = self.evaluator.evaluate(&roster, spec.peering_port).await;
        metrics::record_quorum_health(health.healthy, health.min_required);

        if health.healthy < health.min_required {
            if status.ready_replicas > 1 {
                tracing::info!(cluster = %spec.name, "downgrading quorum");

                let roster = self.store.resize(&spec.name, 1).await?;
                self.scaler.set_replicas(&spec.name, 1).await?;

                return Ok(Reconciliation {
                    condition: QuorumCondition::QuorumDowngraded,
                    size: roster.len() as u32,
                });
            }

            return Err(QuorumError::QuorumInsufficient {
                healthy: health.healthy,
                min_required: health.min_required,
            });
        }

        if status.ready_replicas < spec.desired_replicas {
            tracing::info!(
                cluster = %spec.name,
                desired_replicas = spec.desired_replicas,
                "upgrading quorum"
            );

            let roster = self.store.resize(&spec.name, spec.desired_replicas).await?;
            self.scaler.set_replicas(&spec.name, spec.desired_replicas).await?;

            return Ok(Reconciliation {
                condition: QuorumCondition::QuorumUpgraded,
                size: roster.len() as u32,
            });
        }

        Ok(Reconciliation {
            condition: QuorumCondition::QuorumReady,
            size: health.healthy,
        })
    }
}
