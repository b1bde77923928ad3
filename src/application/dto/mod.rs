/// Data Transfer Objects for application layer
///
/// DTOs carry data from adapters into the use cases. Responses are domain
/// types directly (a persisted `Snapshot` or the full history), so there is
/// no response DTO here.
mod ingest_request;

pub use ingest_request::IngestRequest;
