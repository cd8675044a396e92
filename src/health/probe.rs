//! Single-member liveness probing.
//!
//! # Responsibilities
//! - Normalize a roster address (strip the peering-port suffix)
//! - Issue `GET http://<host>/health` with a hard 500 ms budget
//! - Classify the member healthy or unhealthy
//!
//! # Design Decisions
//! - Healthy iff the response arrives in time, parses, and `ok == true`
//! - Any transport failure or malformed body degrades that one member;
//!   a probe never aborts the surrounding evaluation
//! - `resource_error` is diagnostic only, logged when `ok == false`

use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::config::ProbeConfig;

/// Health payload a member reports on its `/health` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeHealth {
    pub ok: bool,
    #[serde(default)]
    pub resource_error: String,
}

/// Issues bounded-timeout liveness checks against individual members.
#[derive(Debug, Clone)]
pub struct HealthProbe {
    client: reqwest::Client,
    path: String,
}

impl HealthProbe {
    pub fn new(config: &ProbeConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            path: config.path.clone(),
        })
    }

    /// Probe one member and classify it.
    pub async fn probe(&self, address: &str, peering_port: u16) -> bool {
        let host = strip_peering_port(address, peering_port);
        let url = match Url::parse(&format!("http://{}{}", host, self.path)) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(node = %address, error = %e, "invalid probe address");
                return false;
            }
        };

        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(node = %address, error = %e, "health check failed");
                return false;
            }
        };

        let health: NodeHealth = match resp.json().await {
            Ok(health) => health,
            Err(e) => {
                tracing::warn!(node = %address, error = %e, "decoding health check response failed");
                return false;
            }
        };

        if !health.ok && !health.resource_error.is_empty() {
            tracing::error!(
                node = %address,
                resource_error = %health.resource_error,
                "health check reported a node error"
            );
        }
        health.ok
    }
}

/// Strip a single `:<peering_port>` suffix so the probe hits the member's
/// HTTP port instead of its peering port.
pub fn strip_peering_port(address: &str, peering_port: u16) -> String {
    address.replacen(&format!(":{}", peering_port), "", 1)
}
