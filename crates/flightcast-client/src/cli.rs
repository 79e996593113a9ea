//! Client CLI implementation.
//!
//! Provides command-line argument parsing using clap.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};

use flightcast_core::constants::DEFAULT_API_BASE;
use flightcast_core::{PredictorConfig, Result};

/// Log output format for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CliLogFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// Structured JSON output.
    Json,
}

impl From<CliLogFormat> for flightcast_core::LogFormat {
    fn from(fmt: CliLogFormat) -> Self {
        match fmt {
            CliLogFormat::Text => flightcast_core::LogFormat::Text,
            CliLogFormat::Json => flightcast_core::LogFormat::Json,
        }
    }
}

/// Next-flight predictor for recurring game rounds.
#[derive(Debug, Parser)]
#[command(
    name = "flightcast",
    version,
    about = "Polls a game-outcome API and predicts the next flight"
)]
pub struct Cli {
    /// Base URL of the game-outcome API
    #[arg(long, default_value = DEFAULT_API_BASE, value_name = "URL")]
    pub api_base: String,

    /// Seconds between scheduled fetch cycles
    #[arg(long, default_value_t = 30, value_name = "SECS")]
    pub poll_period: u64,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = 10, value_name = "SECS")]
    pub fetch_timeout: u64,

    /// Run exactly one fetch-and-predict cycle, print the result, and exit
    #[arg(long)]
    pub once: bool,

    /// Seed the fallback random source (deterministic synthetic predictions)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: CliLogFormat,
}

impl Cli {
    /// Build and validate the predictor config from the arguments.
    pub fn predictor_config(&self) -> Result<PredictorConfig> {
        let config = PredictorConfig::new()
            .with_api_base(self.api_base.clone())
            .with_poll_period(Duration::from_secs(self.poll_period))
            .with_fetch_timeout(Duration::from_secs(self.fetch_timeout));
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_arguments() {
        let cli = Cli::parse_from(["flightcast"]);
        assert_eq!(cli.api_base, DEFAULT_API_BASE);
        assert_eq!(cli.poll_period, 30);
        assert_eq!(cli.fetch_timeout, 10);
        assert!(!cli.once);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn config_carries_overrides() {
        let cli = Cli::parse_from([
            "flightcast",
            "--api-base",
            "https://example.test",
            "--poll-period",
            "5",
            "--fetch-timeout",
            "2",
        ]);
        let config = cli.predictor_config().unwrap();
        assert_eq!(config.api_base, "https://example.test");
        assert_eq!(config.poll_period, Duration::from_secs(5));
        assert_eq!(config.fetch_timeout, Duration::from_secs(2));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let cli = Cli::parse_from(["flightcast", "--api-base", "not-a-url"]);
        assert!(cli.predictor_config().is_err());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["flightcast", "-vvv"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn log_format_converts_to_core() {
        let core: flightcast_core::LogFormat = CliLogFormat::Json.into();
        assert_eq!(core, flightcast_core::LogFormat::Json);
    }
}
