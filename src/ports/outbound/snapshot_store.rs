use crate::shared::Result;
use crate::telemetry::domain::Snapshot;
use async_trait::async_trait;

/// SnapshotStore port for the append-only snapshot history
///
/// This port abstracts the durable store behind the use cases. The store
/// holds an insertion-ordered sequence of snapshots; there is no update or
/// delete operation in this design.
///
/// # Concurrency
/// Implementations must be `Send + Sync`. `list` calls may run concurrently
/// with each other and with `append`, but an implementation must serialize
/// its own `append` calls internally: the stored sequence must reflect every
/// accepted append exactly once regardless of call interleaving.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Returns the full persisted history, oldest first.
    ///
    /// A store with no prior data returns an empty sequence, not an error.
    ///
    /// # Errors
    /// Returns `TelemetryError::Storage` if the backing data exists but
    /// cannot be read or parsed.
    async fn list(&self) -> Result<Vec<Snapshot>>;

    /// Durably appends exactly one snapshot and returns the persisted value.
    ///
    /// # Errors
    /// Returns `TelemetryError::Storage` if the current history cannot be
    /// read or the write-back fails. On error nothing is appended and the
    /// previously durable data is left intact.
    async fn append(&self, snapshot: Snapshot) -> Result<Snapshot>;
}
