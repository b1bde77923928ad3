//! sysmon-api - Ingestion and retrieval service for PC telemetry snapshots
//!
//! Independent devices submit periodic hardware/software snapshots; this
//! service validates them, persists them durably in an append-only
//! file-backed store, and serves the full history back to a monitoring
//! client. Organized as a hexagonal architecture:
//!
//! - **Domain Layer** (`telemetry`): the Snapshot entity and its validation
//! - **Application Layer** (`application`): ingestion and query use cases
//! - **Ports** (`ports`): inbound service surface and outbound store port
//! - **Adapters** (`adapters`): JSON-file store, axum HTTP boundary
//! - **Shared** (`shared`): common error types and Result alias
//!
//! # Example
//!
//! ```no_run
//! use sysmon_api::prelude::*;
//! use serde_json::json;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let store = Arc::new(JsonFileSnapshotStore::new(PathBuf::from("data/system-info.json")));
//! let service = TelemetryService::new(store);
//!
//! let persisted = service
//!     .ingest(json!({ "brand": "Dell", "cpu": { "model": "i7" } }))
//!     .await?;
//! assert_eq!(persisted.brand, "Dell");
//!
//! let history = service.query().await?;
//! assert_eq!(history.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod telemetry;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::http::router;
    pub use crate::adapters::outbound::filesystem::JsonFileSnapshotStore;
    pub use crate::application::dto::IngestRequest;
    pub use crate::application::use_cases::{IngestSnapshotUseCase, ListSnapshotsUseCase};
    pub use crate::application::TelemetryService;
    pub use crate::config::Settings;
    pub use crate::ports::inbound::TelemetryPort;
    pub use crate::ports::outbound::SnapshotStore;
    pub use crate::shared::error::TelemetryError;
    pub use crate::shared::Result;
    pub use crate::telemetry::domain::Snapshot;
}
