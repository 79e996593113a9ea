//! Predictor configuration.
//!
//! Holds the knobs shared between the gateway and the polling scheduler.
//! The history capacity is a fixed invariant and deliberately not
//! configurable.

use std::time::Duration;

use crate::constants::{DEFAULT_API_BASE, FETCH_TIMEOUT, POLL_PERIOD};
use crate::error::{Error, Result};

/// Configuration for the polling predictor.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Base URL of the game-outcome API.
    pub api_base: String,
    /// Period between scheduled fetch cycles.
    pub poll_period: Duration,
    /// Per-request HTTP timeout.
    pub fetch_timeout: Duration,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            poll_period: POLL_PERIOD,
            fetch_timeout: FETCH_TIMEOUT,
        }
    }
}

impl PredictorConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the poll period.
    pub fn with_poll_period(mut self, period: Duration) -> Self {
        self.poll_period = period;
        self
    }

    /// Set the per-request fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.api_base.is_empty() {
            return Err(Error::Config {
                message: "API base URL must not be empty".into(),
            });
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(Error::Config {
                message: format!("API base URL must be http(s): {}", self.api_base),
            });
        }
        if self.poll_period.is_zero() {
            return Err(Error::Config {
                message: "poll period must be non-zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = PredictorConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.poll_period, Duration::from_secs(30));
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder() {
        let config = PredictorConfig::new()
            .with_api_base("https://example.test/api")
            .with_poll_period(Duration::from_secs(5))
            .with_fetch_timeout(Duration::from_secs(2));

        assert_eq!(config.api_base, "https://example.test/api");
        assert_eq!(config.poll_period, Duration::from_secs(5));
        assert_eq!(config.fetch_timeout, Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_empty_base() {
        let config = PredictorConfig::new().with_api_base("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_rejects_non_http_base() {
        let config = PredictorConfig::new().with_api_base("ftp://example.test");
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_rejects_zero_poll_period() {
        let config = PredictorConfig::new().with_poll_period(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
