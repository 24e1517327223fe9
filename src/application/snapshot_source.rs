// Source trait for snapshot documents
use crate::domain::snapshot::Snapshot;
use async_trait::async_trait;

#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch one snapshot document from the backend.
    async fn fetch(&self) -> anyhow::Result<Snapshot>;
}
