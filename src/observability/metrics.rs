//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define warden metrics (reconcile outcomes, quorum health)
//! - Expose a Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `quorum_reconcile_total` (counter): reconcile cycles by condition
//! - `quorum_healthy_nodes` (gauge): healthy members in the last evaluation
//! - `quorum_min_required_nodes` (gauge): majority threshold in the last evaluation
//! - `quorum_node_health` (gauge): per-node health, 1=healthy 0=unhealthy

use std::net::SocketAddr;

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::quorum::QuorumCondition;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    if let Err(e) = builder.install() {
        tracing::error!(error = %e, "failed to install metrics exporter");
        return;
    }

    describe_counter!(
        "quorum_reconcile_total",
        "Reconcile cycles by resulting condition"
    );
    describe_gauge!(
        "quorum_healthy_nodes",
        "Healthy members seen by the last quorum evaluation"
    );
    describe_gauge!(
        "quorum_min_required_nodes",
        "Majority threshold of the last quorum evaluation"
    );
    describe_gauge!("quorum_node_health", "Per-node health: 1=healthy, 0=unhealthy");

    tracing::info!(address = %addr, "metrics exporter listening");
}

pub fn record_reconcile(condition: QuorumCondition) {
    counter!("quorum_reconcile_total", "condition" => condition.to_string()).increment(1);
}

pub fn record_quorum_health(healthy: u32, min_required: u32) {
    gauge!("quorum_healthy_nodes").set(healthy as f64);
    gauge!("quorum_min_required_nodes").set(min_required as f64);
}

pub fn record_node_health(node: &str, healthy: bool) {
    gauge!("quorum_node_health", "node" => node.to_string())
        .set(if healthy { 1.0 } else { 0.0 });
}
