//! Probe classification and workload client behavior against mock servers.

use std::sync::atomic::Ordering;
use std::time::Duration;

use quorum_warden::config::ProbeConfig;
use quorum_warden::health::HealthProbe;
use quorum_warden::quorum::{QuorumEvaluator, QuorumHealth};
use quorum_warden::roster::Roster;
use quorum_warden::scaler::{HttpWorkloadClient, ReplicaScaler, ScaleError};

mod common;

const PEERING_PORT: u16 = 7700;

fn probe() -> HealthProbe {
    HealthProbe::new(&ProbeConfig::default()).unwrap()
}

#[tokio::test]
async fn test_probe_healthy_member() {
    let addr = common::start_health_endpoint(r#"{"ok": true, "resource_error": ""}"#).await;
    assert!(probe().probe(&addr.to_string(), PEERING_PORT).await);
}

#[tokio::test]
async fn test_probe_reported_not_ok_is_unhealthy() {
    let addr =
        common::start_health_endpoint(r#"{"ok": false, "resource_error": "raft: no leader"}"#)
            .await;
    assert!(!probe().probe(&addr.to_string(), PEERING_PORT).await);
}

#[tokio::test]
async fn test_probe_ignores_resource_error_when_ok() {
    // A true-but-degraded report still classifies healthy.
    let addr =
        common::start_health_endpoint(r#"{"ok": true, "resource_error": "disk pressure"}"#).await;
    assert!(probe().probe(&addr.to_string(), PEERING_PORT).await);
}

#[tokio::test]
async fn test_probe_malformed_body_is_unhealthy() {
    let addr = common::start_health_endpoint("not json at all").await;
    assert!(!probe().probe(&addr.to_string(), PEERING_PORT).await);
}

#[tokio::test]
async fn test_probe_connection_refused_is_unhealthy() {
    let addr = common::unreachable_address().await;
    assert!(!probe().probe(&addr.to_string(), PEERING_PORT).await);
}

#[tokio::test]
async fn test_probe_timeout_is_unhealthy() {
    // Default budget is 500 ms; the member stalls for 2 s.
    let addr = common::start_health_endpoint_with_delay(
        r#"{"ok": true, "resource_error": ""}"#,
        Duration::from_secs(2),
    )
    .await;
    assert!(!probe().probe(&addr.to_string(), PEERING_PORT).await);
}

#[tokio::test]
async fn test_evaluation_completes_despite_mixed_failures() {
    // One healthy, one malformed, one stalled: the tally always completes
    // with best-effort counts.
    let healthy = common::start_health_endpoint(r#"{"ok": true, "resource_error": ""}"#).await;
    let malformed = common::start_health_endpoint("{\"ok\":").await;
    let stalled = common::start_health_endpoint_with_delay(
        r#"{"ok": true, "resource_error": ""}"#,
        Duration::from_secs(2),
    )
    .await;

    let roster = Roster::new(vec![
        healthy.to_string(),
        malformed.to_string(),
        stalled.to_string(),
    ]);

    let evaluator = QuorumEvaluator::new(probe(), 16);
    let health = evaluator.evaluate(&roster, PEERING_PORT).await;

    assert_eq!(
        health,
        QuorumHealth {
            min_required: 2,
            healthy: 1
        }
    );
}

#[tokio::test]
async fn test_evaluation_of_empty_roster() {
    let evaluator = QuorumEvaluator::new(probe(), 16);
    let health = evaluator.evaluate(&Roster::default(), PEERING_PORT).await;
    assert_eq!(
        health,
        QuorumHealth {
            min_required: 1,
            healthy: 0
        }
    );
}

#[tokio::test]
async fn test_set_replicas_at_target_issues_no_write() {
    let controller = common::start_workload_controller(5, 5).await;
    let client = HttpWorkloadClient::new(
        format!("http://{}", controller.addr).parse().unwrap(),
        Duration::from_secs(2),
    )
    .unwrap();

    client.set_replicas("main", 5).await.unwrap();
    assert_eq!(controller.put_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_set_replicas_writes_when_diverged() {
    let controller = common::start_workload_controller(5, 5).await;
    let client = HttpWorkloadClient::new(
        format!("http://{}", controller.addr).parse().unwrap(),
        Duration::from_secs(2),
    )
    .unwrap();

    client.set_replicas("main", 1).await.unwrap();
    assert_eq!(controller.put_count.load(Ordering::SeqCst), 1);
    assert_eq!(controller.replicas.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_workload_status_fetch() {
    let controller = common::start_workload_controller(3, 2).await;
    let client = HttpWorkloadClient::new(
        format!("http://{}", controller.addr).parse().unwrap(),
        Duration::from_secs(2),
    )
    .unwrap();

    let status = client.status("main").await.unwrap();
    assert_eq!(status.replicas, 3);
    assert_eq!(status.ready_replicas, 2);
}

#[tokio::test]
async fn test_unreachable_controller_is_transport_error() {
    let addr = common::unreachable_address().await;
    let client = HttpWorkloadClient::new(
        format!("http://{}", addr).parse().unwrap(),
        Duration::from_millis(500),
    )
    .unwrap();

    let err = client.set_replicas("main", 1).await.unwrap_err();
    assert!(matches!(err, ScaleError::Transport(_)));
}
