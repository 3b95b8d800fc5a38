//! # Observability
//!
//! Structured logging for the Washboard client toolkit using the tracing
//! ecosystem. Library code only emits `tracing` events; installing a
//! subscriber is the binary's job via [`init_logging`].

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::errors::{Error, Result};

/// Install the global tracing subscriber.
///
/// The filter comes from the configured log level and may be any `EnvFilter`
/// directive (`info`, `washboard=debug,reqwest=warn`, ...). Installing a
/// second subscriber is an error.
pub fn init_logging(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| Error::config(format!("Invalid log level '{}': {}", config.log_level, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(log_level = %config.log_level, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_directive_is_rejected() {
        let config = ObservabilityConfig { log_level: "not a [valid] directive!!".to_string() };
        assert!(init_logging(&config).is_err());
    }

    #[test]
    fn test_init_logging_at_most_once() {
        let config = ObservabilityConfig::default();
        let first = init_logging(&config);
        // Either this call installed the subscriber or another test already
        // did; a second call must then fail.
        if first.is_ok() {
            assert!(init_logging(&config).is_err());
        }
    }
}
