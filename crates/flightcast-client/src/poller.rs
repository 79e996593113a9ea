//! Polling scheduler: fetch-and-predict cycles on a fixed cadence.
//!
//! One task owns all state mutation. The first tick fires immediately (the
//! startup fetch), then every poll period. Manual triggers arrive through
//! the handle's single-slot channel, so at most one extra cycle can queue
//! behind the one in flight. Failures never escape a cycle — they become a
//! visible error state plus a fallback prediction.

use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use flightcast_core::PredictorConfig;

use crate::controller::{PredictorHandle, PredictorState};
use crate::gateway::GameSource;

/// User-facing message shown while fallback predictions are in use.
const FETCH_ERROR_MESSAGE: &str = "Failed to fetch game data. Using fallback prediction.";

/// Fetch-and-predict scheduler.
pub struct Poller {
    source: Box<dyn GameSource>,
    state: Arc<PredictorState>,
    manual_rx: mpsc::Receiver<()>,
    period: std::time::Duration,
    shutdown: Arc<Notify>,
    rng: StdRng,
}

impl Poller {
    /// Create a poller and its snapshot handle.
    ///
    /// `seed` pins the fallback RNG for deterministic runs; `None` seeds
    /// from the OS.
    pub fn new(
        source: Box<dyn GameSource>,
        config: &PredictorConfig,
        seed: Option<u64>,
    ) -> (Self, PredictorHandle) {
        let state = Arc::new(PredictorState::default());
        let (manual_tx, manual_rx) = mpsc::channel(1);
        let handle = PredictorHandle::new(state.clone(), manual_tx);

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let poller = Self {
            source,
            state,
            manual_rx,
            period: config.poll_period,
            shutdown: Arc::new(Notify::new()),
            rng,
        };
        (poller, handle)
    }

    /// Spawn the poll loop onto the runtime.
    pub fn spawn(self) -> PollerHandle {
        let shutdown = self.shutdown.clone();
        let task = tokio::spawn(self.run());
        PollerHandle { shutdown, task }
    }

    /// Run the poll loop until shutdown is requested.
    pub async fn run(mut self) {
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.shutdown.notified() => {
                    debug!("poller shutting down");
                    break;
                }
                // First tick fires immediately: the startup fetch.
                _ = ticker.tick() => {
                    self.run_cycle().await;
                }
                Some(()) = self.manual_rx.recv() => {
                    debug!("manual prediction triggered");
                    self.run_cycle().await;
                }
            }
        }
    }

    /// One fetch-and-predict cycle.
    ///
    /// Also the whole of `--once` mode. The error state is cleared at the
    /// start of every attempt and set only on failure.
    pub async fn run_cycle(&mut self) {
        self.state.set_loading(true);
        self.state.clear_error();

        match self.source.fetch_recent_games().await {
            Ok(rounds) if rounds.is_empty() => {
                // Valid response, nothing new: not an error, no fallback.
                info!("no new rounds this cycle");
            }
            Ok(rounds) => {
                let prediction = self
                    .state
                    .with_engine(|engine| engine.derive_prediction(&rounds));
                if let Some(prediction) = prediction {
                    info!(
                        id = prediction.id,
                        predicted_time = %prediction.predicted_time,
                        predicted_duration = prediction.predicted_duration,
                        rounds = rounds.len(),
                        "derived live prediction"
                    );
                }
            }
            Err(e) => {
                warn!(error = %e, "fetch failed, using fallback prediction");
                self.state.set_error(FETCH_ERROR_MESSAGE);
                let prediction = self
                    .state
                    .with_engine(|engine| engine.record_fallback(&mut self.rng, Utc::now()));
                info!(
                    id = prediction.id,
                    predicted_time = %prediction.predicted_time,
                    predicted_duration = prediction.predicted_duration,
                    "recorded fallback prediction"
                );
            }
        }

        self.state.set_loading(false);
    }
}

/// Handle for stopping a spawned poll loop.
pub struct PollerHandle {
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the poll loop and wait for the task to exit.
    ///
    /// A cycle already in flight finishes first; the recurring timer does
    /// not outlive the handle.
    pub async fn shutdown(self) {
        self.shutdown.notify_one();
        let _ = self.task.await;
    }
}
