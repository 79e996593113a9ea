//! Shared predictor state and read-only snapshot handle.
//!
//! One explicit state struct owned by the poll loop — no ambient globals.
//! Readers (the display, tests) take snapshots through [`PredictorHandle`];
//! the only inbound command is [`trigger_manual_prediction`].
//!
//! [`trigger_manual_prediction`]: PredictorHandle::trigger_manual_prediction

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;

use flightcast_core::model::{Forecast, Prediction};
use flightcast_core::PredictionEngine;

/// State shared between the poll loop and snapshot readers.
///
/// All mutation happens from the single poll-loop task; the mutexes exist
/// only so readers can copy out consistent snapshots.
#[derive(Debug, Default)]
pub(crate) struct PredictorState {
    engine: Mutex<PredictionEngine>,
    last_error: Mutex<Option<String>>,
    loading: AtomicBool,
}

// std Mutex: recover the data on poison rather than unwrapping.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

impl PredictorState {
    /// Run a closure against the engine under its lock.
    pub(crate) fn with_engine<T>(&self, f: impl FnOnce(&mut PredictionEngine) -> T) -> T {
        f(&mut lock(&self.engine))
    }

    /// Clear the error state. Called at the start of every fetch attempt.
    pub(crate) fn clear_error(&self) {
        *lock(&self.last_error) = None;
    }

    /// Record a user-facing failure message.
    pub(crate) fn set_error(&self, message: impl Into<String>) {
        *lock(&self.last_error) = Some(message.into());
    }

    /// Flip the cycle-in-progress flag.
    pub(crate) fn set_loading(&self, loading: bool) {
        self.loading.store(loading, Ordering::Release);
    }
}

/// Read-only handle over the predictor state, plus the manual trigger.
///
/// Cloneable; snapshot accessors are idempotent between cycles.
#[derive(Clone)]
pub struct PredictorHandle {
    state: std::sync::Arc<PredictorState>,
    manual_tx: mpsc::Sender<()>,
}

impl PredictorHandle {
    pub(crate) fn new(
        state: std::sync::Arc<PredictorState>,
        manual_tx: mpsc::Sender<()>,
    ) -> Self {
        Self { state, manual_tx }
    }

    /// The current forecast, mirroring the newest prediction.
    pub fn forecast(&self) -> Forecast {
        self.state.with_engine(|engine| engine.forecast())
    }

    /// Snapshot of the prediction history, newest first, at most 10 entries.
    pub fn history(&self) -> Vec<Prediction> {
        self.state.with_engine(|engine| engine.history())
    }

    /// Last fetch failure message, if the most recent attempt failed.
    pub fn last_error(&self) -> Option<String> {
        lock(&self.state.last_error).clone()
    }

    /// True while a fetch cycle is in flight. Presentation uses this to
    /// disable the manual trigger control.
    pub fn is_loading(&self) -> bool {
        self.state.loading.load(Ordering::Acquire)
    }

    /// Request an immediate fetch-and-predict cycle.
    ///
    /// Fire-and-forget: state changes are observed via the snapshots.
    /// Triggers funnel through a bounded single-slot channel into the poll
    /// loop, so a trigger while a cycle is already outstanding coalesces
    /// instead of firing a second concurrent request.
    pub fn trigger_manual_prediction(&self) {
        if self.manual_tx.try_send(()).is_err() {
            tracing::debug!("manual trigger coalesced with pending cycle");
        }
    }
}

impl std::fmt::Debug for PredictorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictorHandle")
            .field("loading", &self.is_loading())
            .field("history_len", &self.history().len())
            .finish()
    }
}
