//! # Configuration Management
//!
//! Environment-driven configuration for the Washboard client toolkit.
//! Every value has a sensible local-development default; `validate()` runs
//! derive-based checks plus custom rules the derive cannot express.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{Error, Result};

/// Default collaborator base URL for local development
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct AppConfig {
    /// Collaborator API configuration
    #[validate(nested)]
    pub api: ApiConfig,

    /// Observability configuration
    #[validate(nested)]
    pub observability: ObservabilityConfig,
}

/// Collaborator API configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApiConfig {
    /// Base URL all collaborator calls are resolved against
    #[validate(length(min = 1, message = "Base URL cannot be empty"))]
    pub base_url: String,

    /// Request timeout in seconds
    #[validate(range(
        min = 1,
        max = 300,
        message = "Timeout must be between 1 and 300 seconds"
    ))]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ObservabilityConfig {
    /// Log level / `EnvFilter` directive, e.g. `info` or `washboard=debug`
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

impl AppConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("WASHBOARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_seconds = std::env::var("WASHBOARD_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECONDS.to_string())
            .parse()
            .map_err(|e| Error::config(format!("Invalid timeout: {}", e)))?;

        let log_level =
            std::env::var("WASHBOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let config = Self {
            api: ApiConfig { base_url, timeout_seconds },
            observability: ObservabilityConfig { log_level },
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(Error::from)?;
        self.validate_custom()
    }

    /// Custom validation logic that goes beyond what the validator crate can do
    fn validate_custom(&self) -> Result<()> {
        let url = url::Url::parse(&self.api.base_url)
            .map_err(|e| Error::config(format!("Invalid base URL: {}", e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::config("Base URL must use http or https"));
        }

        // Request paths always start with '/', so a trailing slash here
        // would produce double-slash URLs.
        if self.api.base_url.ends_with('/') {
            return Err(Error::config("Base URL must not end with '/'"));
        }

        Ok(())
    }
}
