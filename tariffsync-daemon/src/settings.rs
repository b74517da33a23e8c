//! Configuration file loading and command-line overrides.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tariffsync_sync::SyncConfig;

/// Reads a TOML configuration file; without one, the defaults apply.
pub fn load(path: Option<&Path>) -> Result<SyncConfig> {
    let Some(path) = path else {
        return Ok(SyncConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
}

/// Accepts a bare path or a `sqlite://` connection string.
pub fn database_path(connection: &str) -> &str {
    connection
        .strip_prefix("sqlite://")
        .or_else(|| connection.strip_prefix("sqlite:"))
        .unwrap_or(connection)
}
