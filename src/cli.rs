use clap::Parser;
use std::path::PathBuf;

/// Serve telemetry snapshot ingestion and retrieval over HTTP
#[derive(Parser, Debug)]
#[command(name = "sysmon-api")]
#[command(version)]
#[command(about = "Ingestion and retrieval service for PC telemetry snapshots", long_about = None)]
pub struct Args {
    /// Path to the JSON file backing the snapshot store
    /// (defaults to data/system-info.json)
    #[arg(short, long)]
    pub data_path: Option<PathBuf>,

    /// Socket address to bind the HTTP server to (defaults to 0.0.0.0:3000)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Explicit config file path (by default, sysmon-api.config.yml is
    /// discovered in the working directory if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
