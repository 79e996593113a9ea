//! flightcast-client: Polling client for flightcast round predictions.
//!
//! Provides:
//! - CLI argument parsing
//! - HTTP gateway for the recent-games endpoint
//! - Polling scheduler with manual-trigger coalescing
//! - Shared predictor state with read-only snapshots
//! - Terminal display rendering

pub mod cli;
pub mod controller;
pub mod display;
pub mod gateway;
pub mod poller;

pub use cli::{Cli, CliLogFormat};
pub use controller::PredictorHandle;
pub use gateway::{GameSource, HttpGameSource};
pub use poller::{Poller, PollerHandle};
