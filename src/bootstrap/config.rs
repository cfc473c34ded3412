//! Configuration loader
//!
//! Reads the TOML file into the `AppConfig` DTO, then resolves the backend
//! settings: environment overrides first, then the file, then defaults.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use ds_core::config::AppConfig;

pub const CONFIG_PATH_ENV: &str = "DEVSNAP_CONFIG";
pub const GRAPHQL_URL_ENV: &str = "DEVSNAP_GRAPHQL_URL";

pub const DEFAULT_CONFIG_PATH: &str = "devsnap.toml";
pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost/api/v1/data/graphql/";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Load configuration from a TOML file
///
/// Pure data loading: missing sections become empty values.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Config file location: `$DEVSNAP_CONFIG` or `devsnap.toml`.
pub fn resolve_config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Where and how to reach the GraphQL backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    pub graphql_url: String,
    pub request_timeout: Duration,
}

/// Applies `url_override` (normally `$DEVSNAP_GRAPHQL_URL`) and defaults.
pub fn resolve_backend(config: &AppConfig, url_override: Option<String>) -> BackendSettings {
    let graphql_url = url_override
        .filter(|url| !url.trim().is_empty())
        .or_else(|| Some(config.graphql_url.clone()).filter(|url| !url.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string());

    let request_timeout = match config.request_timeout_secs {
        0 => DEFAULT_REQUEST_TIMEOUT,
        secs => Duration::from_secs(secs),
    };

    BackendSettings {
        graphql_url,
        request_timeout,
    }
}
