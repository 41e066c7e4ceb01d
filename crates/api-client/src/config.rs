//! Configuration for the PlaReady API client
//!
//! The API lives under a fixed prefix on the site's origin, so the only thing
//! that normally changes between deployments is the origin itself.

use crate::error::{ApiError, ApiResult};
use plaready_core::config::ClientSection;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Origin used when nothing else is configured (the Flask dev server)
pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";

/// Path prefix every endpoint is mounted under
pub const API_PREFIX: &str = "/api";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Site origin, e.g. `https://plaready.in`
    pub origin: String,
    /// API prefix appended to the origin
    pub api_prefix: String,
    /// Request timeout; `None` waits indefinitely
    #[serde(default, with = "timeout_secs")]
    pub timeout: Option<Duration>,
    /// User agent sent with every request
    pub user_agent: String,
}

mod timeout_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        duration: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            api_prefix: API_PREFIX.to_string(),
            timeout: None,
            user_agent: concat!("plaready-api-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `PLAREADY_ORIGIN`: Site origin the API is served from
    /// - `PLAREADY_TIMEOUT_SECS`: Request timeout in seconds
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `PLAREADY_*` environment overrides on top of this configuration
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(origin) = env::var("PLAREADY_ORIGIN") {
            self.origin = origin;
        }

        if let Some(secs) = env::var("PLAREADY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.timeout = Some(Duration::from_secs(secs));
        }

        self
    }

    /// Apply the `[client]` section of a configuration file
    #[must_use]
    pub fn with_section(mut self, section: &ClientSection) -> Self {
        if let Some(ref origin) = section.origin {
            self.origin.clone_from(origin);
        }
        if let Some(secs) = section.timeout_secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        self
    }

    /// Builder-style method to set the origin
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL every endpoint path is appended to
    #[must_use]
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.origin.trim_end_matches('/'),
            self.api_prefix.trim_matches('/')
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.origin.is_empty() {
            return Err(ApiError::config("origin cannot be empty"));
        }

        if !self.origin.starts_with("http://") && !self.origin.starts_with("https://") {
            return Err(ApiError::config("origin must start with http:// or https://"));
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}
