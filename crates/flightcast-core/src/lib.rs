//! flightcast-core: Prediction engine and shared types for flightcast.
//!
//! This crate provides:
//! - Round and prediction data model
//! - The prediction engine (mean interval / mean duration derivation)
//! - Bounded, newest-first prediction history
//! - Fallback generator for synthetic predictions
//! - Error taxonomy, configuration, and logging setup
//!
//! No network I/O lives here; the gateway and scheduler are in
//! flightcast-client.

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;

pub use config::PredictorConfig;
pub use engine::PredictionEngine;
pub use error::{Error, Result};
pub use logging::{LogFormat, init_logging};
pub use model::{Forecast, GameRound, Prediction, PredictionSource};
