use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for the telemetry service.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// The boundary adapter maps each variant onto an outward disposition:
/// `Validation` becomes a client rejection, `Storage` becomes
/// service-unavailable.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The inbound payload failed presence validation. The store is never
    /// touched when this is raised.
    #[error("Invalid snapshot payload: {message}")]
    Validation { message: String },

    /// The backing file exists but could not be read, parsed, or replaced.
    /// First-run absence of the file is NOT this error.
    #[error("Snapshot store failure at {path}: {details}")]
    Storage { path: PathBuf, details: String },
}

impl TelemetryError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn storage(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::Storage {
            path: path.into(),
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validation_display() {
        let error = TelemetryError::validation("brand is required");
        let display = format!("{}", error);
        assert!(display.contains("Invalid snapshot payload"));
        assert!(display.contains("brand is required"));
    }

    #[test]
    fn test_storage_display() {
        let error = TelemetryError::storage(
            PathBuf::from("/data/system-info.json"),
            "expected a JSON array",
        );
        let display = format!("{}", error);
        assert!(display.contains("Snapshot store failure"));
        assert!(display.contains("/data/system-info.json"));
        assert!(display.contains("expected a JSON array"));
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let error: anyhow::Error = TelemetryError::validation("brand is required").into();
        assert!(matches!(
            error.downcast_ref::<TelemetryError>(),
            Some(TelemetryError::Validation { .. })
        ));
    }
}
