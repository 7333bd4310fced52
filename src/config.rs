//! Environment-backed configuration.
//!
//! Extracted from process environment variables via figment (`PORT`,
//! `CATALOG_BASE_URL`, `LOG_LEVEL`, ...). `catalog_base_url` is the only
//! required value; a missing or unparseable URL is a wiring fault and fails
//! startup immediately.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the external catalog/directory service.
    pub catalog_base_url: String,
    /// Base tracing level for this crate's targets.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Seconds to wait for in-flight requests to drain on shutdown.
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
    /// Per-request timeout for catalog service calls, in seconds.
    #[serde(default = "default_catalog_timeout")]
    pub catalog_timeout: u64,
    /// Optional JSON file with locale resource overrides.
    #[serde(default)]
    pub locale_file: Option<PathBuf>,
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_shutdown_timeout() -> u64 {
    10
}

fn default_catalog_timeout() -> u64 {
    15
}
