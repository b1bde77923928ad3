use crate::shared::Result;
use crate::telemetry::domain::Snapshot;
use async_trait::async_trait;
use serde_json::Value;

/// TelemetryPort - Inbound port for snapshot ingestion and retrieval
///
/// This port defines the interface that boundary adapters (HTTP, CLI, etc.)
/// use to drive the application. It represents the service's public API:
/// exactly two operations, both stateless and request-scoped.
#[async_trait]
pub trait TelemetryPort: Send + Sync {
    /// Validates an untrusted payload and durably persists it as a snapshot.
    ///
    /// # Arguments
    /// * `payload` - The raw JSON payload as decoded by the boundary adapter
    ///
    /// # Returns
    /// The persisted snapshot, including server-assigned fields.
    ///
    /// # Errors
    /// Returns `TelemetryError::Validation` for a malformed payload (the
    /// store is not touched), or `TelemetryError::Storage` if persistence
    /// fails.
    async fn ingest(&self, payload: Value) -> Result<Snapshot>;

    /// Returns the full snapshot history in the order it was accepted.
    ///
    /// # Errors
    /// Returns `TelemetryError::Storage` if the history cannot be read.
    async fn query(&self) -> Result<Vec<Snapshot>>;
}
