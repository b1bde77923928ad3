/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates the domain
/// entity and coordinates with persistence through the outbound port.
pub mod dto;
pub mod service;
pub mod use_cases;

pub use service::TelemetryService;
