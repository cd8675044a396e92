//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Controller / evaluator / probe produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (reconcile counters, health gauges)
//!
//! Consumers:
//!     → Log aggregation (stdout, remote)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing with per-node / per-cluster fields
//! - Metrics are cheap (atomic updates behind the metrics facade)
//! - Recording helpers are no-ops until an exporter is installed, so the
//!   core never depends on the exporter being up

pub mod logging;
pub mod metrics;
