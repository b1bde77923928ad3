//! Configuration support for sysmon-api.
//!
//! Provides YAML-based configuration through `sysmon-api.config.yml` files,
//! layered under command-line flags: CLI > config file > built-in defaults.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "sysmon-api.config.yml";

/// Default backing file, matching the layout monitoring clients expect.
const DEFAULT_DATA_PATH: &str = "data/system-info.json";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub data_path: Option<PathBuf>,
    pub bind_addr: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path of the JSON file backing the snapshot store
    pub data_path: PathBuf,
    /// Socket address the HTTP server binds to
    pub bind_addr: SocketAddr,
}

impl Settings {
    /// Resolves settings from CLI arguments over an optional config file.
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let data_path = args
            .data_path
            .clone()
            .or(config.data_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let bind = args
            .bind
            .clone()
            .or(config.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;

        Ok(Self {
            data_path,
            bind_addr,
        })
    }
}
