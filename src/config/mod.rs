//! Service configuration for errdesk
//!
//! One JSON file (`errdesk.json` by default) describing the device set, the
//! table file per device, the default device for webhook queries, the reload
//! poll interval, and the HTTP server block. Loaded once at boot; reloading
//! configuration requires a restart (table files hot-reload, the config does
//! not).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;

/// Configuration errors are fatal; the process refuses to start on any of
/// them.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// One device's table binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Device selector, e.g. "w"
    pub id: String,

    /// Path to the device's CSV table file
    pub table: PathBuf,

    /// Whether numeric queries on this device use the interval remap
    /// candidate path (default: false)
    #[serde(default)]
    pub remap: bool,
}

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server block
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Configured devices (required, at least one)
    pub devices: Vec<DeviceConfig>,

    /// Device used when a webhook utterance carries no selector
    pub default_device: String,

    /// Table file poll interval in seconds (default: 5)
    #[serde(default = "default_poll_secs")]
    pub reload_poll_secs: u64,
}

fn default_poll_secs() -> u64 {
    5
}

impl ServiceConfig {
    /// Load and validate configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: ServiceConfig = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.devices.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one device must be configured".to_string(),
            ));
        }

        for device in &self.devices {
            if device.id.trim().is_empty() {
                return Err(ConfigError::Invalid("device id must be non-empty".to_string()));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for device in &self.devices {
            if !seen.insert(device.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate device id '{}'",
                    device.id
                )));
            }
        }

        if !seen.contains(self.default_device.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "default_device '{}' is not a configured device",
                self.default_device
            )));
        }

        if self.reload_poll_secs == 0 {
            return Err(ConfigError::Invalid(
                "reload_poll_secs must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<(), ConfigError> {
        let config: ServiceConfig = serde_json::from_str(json).unwrap();
        config.validate()
    }

    #[test]
    fn test_minimal_config() {
        assert!(parse(
            r#"{ "devices": [{ "id": "w", "table": "w.csv", "remap": true }],
                 "default_device": "w" }"#
        )
        .is_ok());
    }

    #[test]
    fn test_rejects_empty_devices() {
        let err = parse(r#"{ "devices": [], "default_device": "w" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_duplicate_device_ids() {
        let err = parse(
            r#"{ "devices": [{ "id": "w", "table": "1.csv" },
                             { "id": "w", "table": "2.csv" }],
                 "default_device": "w" }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_unknown_default_device() {
        let err = parse(
            r#"{ "devices": [{ "id": "w", "table": "w.csv" }],
                 "default_device": "a" }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_defaults() {
        let config: ServiceConfig = serde_json::from_str(
            r#"{ "devices": [{ "id": "w", "table": "w.csv" }],
                 "default_device": "w" }"#,
        )
        .unwrap();
        assert_eq!(config.reload_poll_secs, 5);
        assert!(!config.devices[0].remap);
    }
}
