//! Configuration data structures
//!
//! This module maps TOML to plain DTOs. It holds no defaults and no
//! validation: missing keys become empty values and the bootstrap layer
//! decides what to do with them.

/// Application configuration DTO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// GraphQL endpoint (may be empty)
    pub graphql_url: String,

    /// Request timeout in seconds, 0 when unset
    pub request_timeout_secs: u64,

    /// Device to open at startup (may be empty)
    pub device_id: String,

    /// Snapshot to open at startup (may be empty)
    pub snapshot_id: String,
}

impl AppConfig {
    /// Create AppConfig from a TOML value
    ///
    /// Missing keys are facts, not errors.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section_str = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            graphql_url: section_str("backend", "graphql_url"),
            request_timeout_secs: toml_value
                .get("backend")
                .and_then(|b| b.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .map(|secs| secs.max(0) as u64)
                .unwrap_or(0),
            device_id: section_str("session", "device_id"),
            snapshot_id: section_str("session", "snapshot_id"),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            graphql_url: String::new(),
            request_timeout_secs: 0,
            device_id: String::new(),
            snapshot_id: String::new(),
        }
    }
}
