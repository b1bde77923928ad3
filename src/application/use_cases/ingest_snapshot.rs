use crate::application::dto::IngestRequest;
use crate::ports::outbound::SnapshotStore;
use crate::shared::Result;
use crate::telemetry::domain::Snapshot;
use std::sync::Arc;

/// IngestSnapshotUseCase - Core use case for snapshot ingestion
///
/// Validates the inbound payload, constructs the entity, and delegates
/// persistence to the injected store. On validation failure the store is
/// never invoked; store errors are propagated verbatim so the boundary
/// adapter decides the outward response.
///
/// # Type Parameters
/// * `S` - SnapshotStore implementation
pub struct IngestSnapshotUseCase<S> {
    store: Arc<S>,
}

impl<S> IngestSnapshotUseCase<S>
where
    S: SnapshotStore,
{
    /// Creates a new IngestSnapshotUseCase with an injected store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Executes the ingestion use case
    ///
    /// # Arguments
    /// * `request` - The ingestion request carrying the raw payload
    ///
    /// # Returns
    /// The persisted snapshot as returned by the store
    pub async fn execute(&self, request: IngestRequest) -> Result<Snapshot> {
        let snapshot = Snapshot::from_payload(&request.payload)?;
        tracing::debug!(brand = %snapshot.brand, "accepted snapshot, appending to store");
        self.store.append(snapshot).await
    }
}
