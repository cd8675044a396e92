//! quorum-warden
//!
//! Quorum-maintenance control loop for a replicated node set.
//!
//! # Architecture Overview
//!
//! ```text
//!                ┌──────────────────────────────────────────────────┐
//!                │                 QUORUM WARDEN                    │
//!                │                                                  │
//!   interval ────┼─▶ harness ──▶ workload status ──▶ controller     │
//!                │                                       │          │
//!                │              roster store ◀───────────┤          │
//!                │              (get / resize)           │          │
//!                │                                       ▼          │
//!                │              health probes ◀──── evaluator       │
//!                │              (bounded fan-out)        │          │
//!                │                                       ▼          │
//!                │              replica scaler ◀── scale directive  │
//!                │                                                  │
//!                │  ┌────────────────────────────────────────────┐  │
//!                │  │ Cross-cutting: config, logging, metrics    │  │
//!                │  └────────────────────────────────────────────┘  │
//!                └──────────────────────────────────────────────────┘
//! ```
//!
//! The harness is a plain timer; event-driven scheduling, retry policy and
//! user-visible status belong to whatever embeds the library.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quorum_warden::config::load_config;
use quorum_warden::health::HealthProbe;
use quorum_warden::observability::logging;
use quorum_warden::quorum::{QuorumController, QuorumEvaluator};
use quorum_warden::roster::{AddressTemplate, FileRosterStore};
use quorum_warden::scaler::HttpWorkloadClient;

#[derive(Parser, Debug)]
#[command(name = "quorum-warden")]
#[command(about = "Quorum maintenance control loop for a replicated node set")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "warden.toml")]
    config: PathBuf,

    /// Run a single reconcile cycle and exit (for external schedulers).
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(&args.config)?;

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                logging::default_directive(&config.observability.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("quorum-warden v0.1.0 starting");
    tracing::info!(
        cluster = %config.cluster.name,
        desired_replicas = config.cluster.desired_replicas,
        peering_port = config.cluster.peering_port,
        probe_timeout_ms = config.probe.timeout_ms,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            quorum_warden::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let template = AddressTemplate::new(
        config.roster.address_template.clone(),
        config.cluster.peering_port,
    );
    let store = FileRosterStore::new(PathBuf::from(&config.roster.path), template);
    let workload = HttpWorkloadClient::new(
        config.workload.controller_url.parse()?,
        Duration::from_secs(config.workload.request_timeout_secs),
    )?;
    let probe = HealthProbe::new(&config.probe)?;
    let evaluator = QuorumEvaluator::new(probe, config.probe.max_concurrency);

    let spec = config.cluster.to_spec();
    let controller = QuorumController::new(store, workload.clone(), evaluator);

    let interval = Duration::from_secs(config.reconcile.interval_secs);
    loop {
        // The controller logs each outcome; the harness only drives it.
        let cycle: Result<(), Box<dyn std::error::Error>> =
            match workload.status(&spec.name).await {
                Ok(status) => controller
                    .reconcile(&spec, &status)
                    .await
                    .map(|_| ())
                    .map_err(Into::into),
                Err(e) => {
                    tracing::error!(cluster = %spec.name, error = %e, "fetching workload status failed");
                    Err(e.into())
                }
            };

        if args.once {
            // Single-cycle mode surfaces a failed cycle in the exit code.
            cycle?;
            break;
        }
        tokio::time::sleep(interval).await;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
