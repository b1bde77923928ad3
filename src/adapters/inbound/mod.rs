/// Inbound adapters - Boundary adapters driving the application
pub mod http;
