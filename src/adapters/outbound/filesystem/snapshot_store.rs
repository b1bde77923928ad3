use crate::ports::outbound::SnapshotStore;
use crate::shared::error::TelemetryError;
use crate::shared::Result;
use crate::telemetry::domain::Snapshot;
use async_trait::async_trait;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// JsonFileSnapshotStore - SnapshotStore over a single JSON-array file
///
/// The whole history lives in one file as a pretty-printed JSON array. A
/// missing file means first run and reads as an empty history; a file that
/// exists but does not parse is a storage fault surfaced to the caller,
/// never silently replaced.
///
/// # Concurrency
/// One instance owns exclusive write access to its file. `append` performs
/// a read-modify-write of the full history; the internal mutex serializes
/// those cycles so concurrent appends cannot lose records. The write-back
/// goes through a temp file in the same directory followed by a rename, so
/// a failed write never leaves the file unparseable and concurrent `list`
/// calls always observe either the old or the new content.
pub struct JsonFileSnapshotStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileSnapshotStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, details: impl Into<String>) -> anyhow::Error {
        TelemetryError::storage(self.path.clone(), details.into()).into()
    }

    async fn read_all(&self) -> Result<Vec<Snapshot>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            // First run: no file yet, an empty history
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.storage_error(format!("failed to read file: {}", e))),
        };

        serde_json::from_slice(&bytes)
            .map_err(|e| self.storage_error(format!("failed to parse snapshot history: {}", e)))
    }

    /// Replaces the file contents atomically: write to a temp file in the
    /// target directory, flush, then rename over the destination.
    fn replace_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    async fn write_all(&self, snapshots: &[Snapshot]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(snapshots)
            .map_err(|e| self.storage_error(format!("failed to serialize history: {}", e)))?;

        let path = self.path.clone();
        let outcome = tokio::task::spawn_blocking(move || Self::replace_file(&path, &bytes))
            .await
            .map_err(|e| self.storage_error(format!("write task failed: {}", e)))?;

        outcome.map_err(|e| self.storage_error(format!("failed to write file: {}", e)))
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn list(&self) -> Result<Vec<Snapshot>> {
        let snapshots = self.read_all().await?;
        tracing::debug!(count = snapshots.len(), "loaded snapshot history");
        Ok(snapshots)
    }

    async fn append(&self, snapshot: Snapshot) -> Result<Snapshot> {
        // Serialize the whole read-modify-write cycle; releasing the guard
        // between read and write would reintroduce the lost-update race.
        let _guard = self.write_lock.lock().await;

        let mut snapshots = self.read_all().await?;
        snapshots.push(snapshot.clone());
        self.write_all(&snapshots).await?;

        tracing::debug!(
            brand = %snapshot.brand,
            total = snapshots.len(),
            "appended snapshot"
        );
        Ok(snapshot)
    }
}
