//! Workload controller HTTP client.
//!
//! Endpoint shape:
//! - `GET  <base>/clusters/<id>/status`   -> `{"replicas": n, "ready_replicas": m}`
//! - `GET  <base>/clusters/<id>/replicas` -> `{"replicas": n}`
//! - `PUT  <base>/clusters/<id>/replicas` with `{"replicas": n}`

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::quorum::WorkloadStatus;
use crate::scaler::{ReplicaScaler, ScaleError};

#[derive(Debug, Serialize, Deserialize)]
struct ReplicasPayload {
    replicas: u32,
}

/// Client for the external workload controller.
///
/// Cheap to clone; the harness keeps one for status reads and hands a
/// clone to the controller as its [`ReplicaScaler`].
#[derive(Debug, Clone)]
pub struct HttpWorkloadClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpWorkloadClient {
    pub fn new(mut base_url: Url, timeout: Duration) -> reqwest::Result<Self> {
        // Url::join treats a path without a trailing slash as a file.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Current workload status, total and ready member counts.
    pub async fn status(&self, cluster: &str) -> Result<WorkloadStatus, ScaleError> {
        self.get_json(self.endpoint(cluster, "status")?).await
    }

    async fn current_replicas(&self, cluster: &str) -> Result<u32, ScaleError> {
        let payload: ReplicasPayload = self.get_json(self.endpoint(cluster, "replicas")?).await?;
        Ok(payload.replicas)
    }

    fn endpoint(&self, cluster: &str, leaf: &str) -> Result<Url, ScaleError> {
        self.base_url
            .join(&format!("clusters/{}/{}", cluster, leaf))
            .map_err(|e| ScaleError::Transport(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ScaleError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScaleError::Transport(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ScaleError::Status {
                status: status.as_u16(),
                message,
            });
        }
        resp.json()
            .await
            .map_err(|e| ScaleError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl ReplicaScaler for HttpWorkloadClient {
    async fn set_replicas(&self, cluster: &str, desired: u32) -> Result<(), ScaleError> {
        let current = self.current_replicas(cluster).await?;
        if current == desired {
            tracing::debug!(
                cluster = %cluster,
                replicas = desired,
                "workload already scaled to desired replicas"
            );
            return Ok(());
        }

        let resp = self
            .client
            .put(self.endpoint(cluster, "replicas")?)
            .json(&ReplicasPayload { replicas: desired })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(cluster = %cluster, error = %e, "updating workload replicas failed");
                ScaleError::Transport(e.to_string())
            })?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ScaleError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}
