use crate::ports::outbound::SnapshotStore;
use crate::shared::Result;
use crate::telemetry::domain::Snapshot;
use std::sync::Arc;

/// ListSnapshotsUseCase - Use case for retrieving the snapshot history
///
/// Delegates to the store's list operation with no transformation and no
/// side effects. Ordering is the store's insertion order (oldest first);
/// any newest-first presentation is a transport concern.
pub struct ListSnapshotsUseCase<S> {
    store: Arc<S>,
}

impl<S> ListSnapshotsUseCase<S>
where
    S: SnapshotStore,
{
    /// Creates a new ListSnapshotsUseCase with an injected store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Executes the query use case, returning the full history
    pub async fn execute(&self) -> Result<Vec<Snapshot>> {
        self.store.list().await
    }
}
