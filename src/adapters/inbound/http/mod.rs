/// HTTP boundary adapter - axum router and handlers
mod router;

pub use router::router;
