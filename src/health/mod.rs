//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! Roster address ("host:peering_port")
//!     → probe.rs (strip peering port, GET /health, 500 ms budget)
//!     → healthy / unhealthy classification
//!     → tallied by the quorum evaluator
//! ```
//!
//! # Design Decisions
//! - One probe, one verdict: no hysteresis; every reconcile cycle
//!   re-probes from scratch
//! - A failed probe degrades that member only, never the evaluation

pub mod probe;

pub use probe::{HealthProbe, NodeHealth};
