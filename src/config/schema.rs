//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the warden.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::quorum::ClusterSpec;
use crate::roster::AddressTemplate;

/// Root configuration for the warden.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WardenConfig {
    /// Managed cluster parameters.
    pub cluster: ClusterConfig,

    /// Health probe settings.
    pub probe: ProbeConfig,

    /// Reconcile harness settings.
    pub reconcile: ReconcileConfig,

    /// Roster persistence settings.
    pub roster: RosterConfig,

    /// Workload controller endpoint settings.
    pub workload: WorkloadConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Managed cluster parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Cluster identity; keys the roster record.
    pub name: String,

    /// Member count the cluster should run at.
    pub desired_replicas: u32,

    /// Inter-member peering port, stripped from addresses before probing.
    pub peering_port: u16,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            name: "main".to_string(),
            desired_replicas: 3,
            peering_port: 8107,
        }
    }
}

impl ClusterConfig {
    pub fn to_spec(&self) -> ClusterSpec {
        ClusterSpec {
            name: self.name.clone(),
            desired_replicas: self.desired_replicas,
            peering_port: self.peering_port,
        }
    }
}

/// Health probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Per-probe timeout in milliseconds.
    pub timeout_ms: u64,

    /// Path to probe on each member.
    pub path: String,

    /// Maximum number of in-flight probes.
    pub max_concurrency: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 500,
            path: "/health".to_string(),
            max_concurrency: 16,
        }
    }
}

/// Reconcile harness configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Seconds between reconcile cycles.
    pub interval_secs: u64,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self { interval_secs: 10 }
    }
}

/// Roster persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Path of the roster record file.
    pub path: String,

    /// Pattern for minting member addresses when the roster grows.
    /// `{cluster}` and `{index}` are substituted.
    pub address_template: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            path: "roster.toml".to_string(),
            address_template: AddressTemplate::DEFAULT_PATTERN.to_string(),
        }
    }
}

/// Workload controller endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Base URL of the external workload controller.
    pub controller_url: String,

    /// Request timeout in seconds for controller calls.
    pub request_timeout_secs: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            controller_url: "http://127.0.0.1:9301".to_string(),
            request_timeout_secs: 5,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
