//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// API client settings
    #[serde(default)]
    pub client: ClientSection,

    /// Session storage settings
    #[serde(default)]
    pub storage: StorageSection,

    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetrySection,
}

/// API client configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientSection {
    /// Origin the API is served from, e.g. `https://plaready.in`
    #[serde(default)]
    pub origin: Option<String>,

    /// Request timeout in seconds (unset means wait indefinitely)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Session storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
    /// Prefix applied to every key this client writes
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Location of the session file
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            path: None,
        }
    }
}

impl StorageSection {
    /// Session file path, falling back to the platform data directory
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from(".plaready"))
                .join("plaready")
                .join("session.json")
        })
    }
}

fn default_namespace() -> String {
    "plaready".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySection {
    /// Default `tracing` filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit one JSON object per log event instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetrySection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
