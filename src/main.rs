use anyhow::Context;
use std::path::Path;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use sysmon_api::adapters::inbound::http::router;
use sysmon_api::adapters::outbound::filesystem::JsonFileSnapshotStore;
use sysmon_api::application::TelemetryService;
use sysmon_api::cli::Args;
use sysmon_api::config::{discover_config, load_config_from_path, Settings};
use sysmon_api::ports::inbound::TelemetryPort;
use sysmon_api::shared::Result;

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("An error occurred: {}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("Caused by: {}", err);
            source = err.source();
        }

        process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sysmon_api=info")),
        )
        .init();
}

async fn run() -> Result<()> {
    let args = Args::parse_args();

    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(&args, config)?;

    // Wiring: one store instance owns the backing file for the whole process
    let store = Arc::new(JsonFileSnapshotStore::new(settings.data_path.clone()));
    let service: Arc<dyn TelemetryPort> = Arc::new(TelemetryService::new(store));
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind_addr))?;

    tracing::info!(
        addr = %settings.bind_addr,
        data_path = %settings.data_path.display(),
        "sysmon-api listening"
    );

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
