/// Use cases module containing application business logic orchestration
mod ingest_snapshot;
mod list_snapshots;

pub use ingest_snapshot::IngestSnapshotUseCase;
pub use list_snapshots::ListSnapshotsUseCase;
