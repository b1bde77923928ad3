/// Outbound ports (Driven ports) - Persistence interfaces
pub mod snapshot_store;

pub use snapshot_store::SnapshotStore;
