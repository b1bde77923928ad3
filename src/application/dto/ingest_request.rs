use serde_json::Value;

/// IngestRequest - Internal request DTO for the snapshot ingestion use case
///
/// Wraps the raw payload exactly as the boundary adapter decoded it. No
/// validation has happened yet at this point; that is the use case's job.
#[derive(Debug, Clone)]
pub struct IngestRequest {
    /// The untrusted JSON payload submitted by a producer
    pub payload: Value,
}

impl IngestRequest {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }
}
