// HTTP snapshot source implementation
use crate::application::snapshot_source::SnapshotSource;
use crate::domain::snapshot::Snapshot;
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpSnapshotSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSnapshotSource {
    pub fn new(url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch(&self) -> anyhow::Result<Snapshot> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("snapshot request to {} failed", self.url))?
            .error_for_status()
            .context("snapshot endpoint returned an error status")?;

        let snapshot: Snapshot = response
            .json()
            .await
            .context("failed to decode snapshot JSON")?;

        tracing::debug!(fetched_at = %snapshot.fetched_at, "snapshot received");
        Ok(snapshot)
    }
}
