/// Filesystem adapter backing the snapshot store with a single JSON file
mod snapshot_store;

pub use snapshot_store::JsonFileSnapshotStore;
