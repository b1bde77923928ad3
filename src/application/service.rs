use crate::application::dto::IngestRequest;
use crate::application::use_cases::{IngestSnapshotUseCase, ListSnapshotsUseCase};
use crate::ports::inbound::TelemetryPort;
use crate::ports::outbound::SnapshotStore;
use crate::shared::Result;
use crate::telemetry::domain::Snapshot;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// TelemetryService - Implements the inbound port over the two use cases
///
/// Bundles ingestion and retrieval behind a single object so the boundary
/// adapter holds one handle. The service itself is stateless; the shared
/// store is the only mutable resource and is owned behind an `Arc`.
pub struct TelemetryService<S> {
    ingest: IngestSnapshotUseCase<S>,
    list: ListSnapshotsUseCase<S>,
}

impl<S> TelemetryService<S>
where
    S: SnapshotStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            ingest: IngestSnapshotUseCase::new(Arc::clone(&store)),
            list: ListSnapshotsUseCase::new(store),
        }
    }
}

#[async_trait]
impl<S> TelemetryPort for TelemetryService<S>
where
    S: SnapshotStore,
{
    async fn ingest(&self, payload: Value) -> Result<Snapshot> {
        self.ingest.execute(IngestRequest::new(payload)).await
    }

    async fn query(&self) -> Result<Vec<Snapshot>> {
        self.list.execute().await
    }
}
