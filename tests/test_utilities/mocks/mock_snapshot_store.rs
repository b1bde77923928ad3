use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use sysmon_api::prelude::*;

/// Mock SnapshotStore for testing
///
/// Keeps the history in memory and counts append calls so tests can assert
/// that validation failures never reach the store.
pub struct MockSnapshotStore {
    snapshots: Mutex<Vec<Snapshot>>,
    append_calls: AtomicUsize,
    should_fail: bool,
}

impl MockSnapshotStore {
    pub fn new() -> Self {
        Self {
            snapshots: Mutex::new(Vec::new()),
            append_calls: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            snapshots: Mutex::new(Vec::new()),
            append_calls: AtomicUsize::new(0),
            should_fail: true,
        }
    }

    pub fn append_calls(&self) -> usize {
        self.append_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.snapshots.lock().unwrap().len()
    }
}

impl Default for MockSnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for MockSnapshotStore {
    async fn list(&self) -> Result<Vec<Snapshot>> {
        if self.should_fail {
            return Err(TelemetryError::storage("mock", "mock list failure").into());
        }
        Ok(self.snapshots.lock().unwrap().clone())
    }

    async fn append(&self, snapshot: Snapshot) -> Result<Snapshot> {
        self.append_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(TelemetryError::storage("mock", "mock append failure").into());
        }
        self.snapshots.lock().unwrap().push(snapshot.clone());
        Ok(snapshot)
    }
}
