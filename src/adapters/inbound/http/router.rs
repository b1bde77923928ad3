use crate::ports::inbound::TelemetryPort;
use crate::shared::error::TelemetryError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::Value;
use std::sync::Arc;

type Service = Arc<dyn TelemetryPort>;

/// Builds the HTTP router over the telemetry service.
///
/// The wire surface mirrors the monitoring client's expectations:
/// - `POST /system-info` submits one snapshot (201 on success)
/// - `GET /system-info` returns the history, newest first
/// - `GET /health` liveness probe
/// - anything else is a JSON 404
pub fn router(service: Service) -> Router {
    Router::new()
        .route(
            "/system-info",
            get(list_system_info).post(submit_system_info),
        )
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(service)
}

async fn submit_system_info(
    State(service): State<Service>,
    Json(payload): Json<Value>,
) -> Response {
    match service.ingest(payload).await {
        Ok(snapshot) => (StatusCode::CREATED, Json(snapshot)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn list_system_info(State(service): State<Service>) -> Response {
    match service.query().await {
        Ok(mut snapshots) => {
            // Stored oldest-first; the client renders newest-first
            snapshots.reverse();
            Json(snapshots).into_response()
        }
        Err(e) => error_response(e),
    }
}

async fn health() -> Response {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "sysmon-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
    .into_response()
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "Not Found" })),
    )
        .into_response()
}

/// Maps a use-case failure onto one of the two failure dispositions:
/// rejected-as-invalid (400) or service-unavailable (503).
fn error_response(error: anyhow::Error) -> Response {
    let status = match error.downcast_ref::<TelemetryError>() {
        Some(TelemetryError::Validation { .. }) => {
            tracing::warn!(%error, "rejected snapshot submission");
            StatusCode::BAD_REQUEST
        }
        _ => {
            tracing::error!(%error, "snapshot store unavailable");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    (
        status,
        Json(serde_json::json!({ "message": error.to_string() })),
    )
        .into_response()
}
