//! Logging and session correlation for PlaReady tools
//!
//! Logs always go to stderr so command output on stdout stays parseable.
//! `RUST_LOG` wins over the configured level when it is set.

use once_cell::sync::Lazy;
use plaready_core::config::TelemetrySection;
use serde::{Deserialize, Serialize};
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Global session ID for correlating logs
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Initialize with custom configuration
pub fn init_with_config(config: TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", config.log_level, e))?;

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(config.show_target)
        .with_file(config.show_file)
        .with_line_number(config.show_line_number);

    let result = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(())
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub show_target: bool,
    pub show_file: bool,
    pub show_line_number: bool,
    /// Emit one JSON object per event instead of compact text
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            show_target: false,
            show_file: false,
            show_line_number: false,
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Build from the `[telemetry]` section of a configuration file
    pub fn from_section(section: &TelemetrySection) -> Self {
        Self {
            log_level: section.log_level.clone(),
            json: section.json,
            ..Self::default()
        }
    }

    /// Raise the level for repeated `-v` flags; zero keeps the configured level
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        let level = match verbose {
            0 => return self,
            1 => "debug",
            _ => "trace",
        };
        self.log_level = level.to_string();
        self.show_target = true;
        self
    }
}

/// Timer for measuring operation duration
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    /// Start a new timer
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    /// Stop the timer and log the duration
    pub fn stop(self) -> Duration {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.name,
            duration_ms = duration.as_millis(),
            session_id = %session_id(),
            "Timer completed"
        );
        duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_level, "warn");
        assert!(!config.json);
    }

    #[test]
    fn test_from_section() {
        let section = TelemetrySection {
            log_level: "plaready_api_client=debug".to_string(),
            json: true,
        };
        let config = TelemetryConfig::from_section(&section);
        assert_eq!(config.log_level, "plaready_api_client=debug");
        assert!(config.json);
        assert!(!config.show_target);

        assert!(!TelemetryConfig::from_section(&TelemetrySection::default()).json);
    }

    #[test]
    fn test_verbosity() {
        let base = TelemetryConfig::default();
        assert_eq!(base.clone().with_verbosity(0), base);
        assert_eq!(base.clone().with_verbosity(1).log_level, "debug");
        assert_eq!(base.clone().with_verbosity(3).log_level, "trace");
        assert!(base.with_verbosity(2).show_target);
    }

    #[test]
    fn test_timer() {
        let timer = Timer::start("test_operation");
        std::thread::sleep(Duration::from_millis(10));
        let duration = timer.stop();
        assert!(duration.as_millis() >= 10);
    }

    #[test]
    fn test_session_id() {
        let id = session_id();
        assert!(!id.is_empty());
        // Should be a valid UUID
        assert!(Uuid::parse_str(id).is_ok());
        assert_eq!(id, session_id());
    }
}
