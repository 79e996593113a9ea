//! Prediction engine: derives next-flight estimates from recent rounds and
//! maintains the bounded prediction history.

pub mod fallback;
pub mod history;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::constants::{DEFAULT_DURATION_SECS, DEFAULT_INTERVAL_MS};
use crate::model::{Forecast, GameRound, Prediction, PredictionSource};

pub use history::PredictionHistory;

/// Mean spacing between consecutive rounds, in milliseconds.
///
/// Rounds are newest-first; with fewer than two rounds the default of
/// 30 000 ms applies. The absolute value is taken so an out-of-order feed
/// still yields a positive interval.
pub fn mean_interval_ms(rounds: &[GameRound]) -> i64 {
    if rounds.len() < 2 {
        return DEFAULT_INTERVAL_MS;
    }
    let total: i64 = rounds
        .windows(2)
        .map(|pair| pair[0].timestamp.timestamp_millis() - pair[1].timestamp.timestamp_millis())
        .sum();
    (total as f64 / (rounds.len() - 1) as f64).abs().round() as i64
}

/// Mean round duration in seconds, unrounded. Defaults to 15 s with no data.
pub fn mean_duration_secs(rounds: &[GameRound]) -> f64 {
    if rounds.is_empty() {
        return DEFAULT_DURATION_SECS;
    }
    rounds.iter().map(|r| r.duration).sum::<f64>() / rounds.len() as f64
}

/// Engine owning the prediction history and current forecast.
///
/// All mutation funnels through [`derive_prediction`](Self::derive_prediction)
/// and [`record_fallback`](Self::record_fallback); readers take snapshots.
#[derive(Debug, Default)]
pub struct PredictionEngine {
    history: PredictionHistory,
    forecast: Forecast,
    next_id: u64,
}

impl PredictionEngine {
    /// Create an engine with an empty history and unset forecast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a live prediction from recent rounds (newest-first).
    ///
    /// Returns `None` for an empty slice — an empty update carries nothing
    /// to anchor a prediction on and is treated as "no update" upstream.
    /// A single round still produces a prediction using the default
    /// interval.
    pub fn derive_prediction(&mut self, rounds: &[GameRound]) -> Option<Prediction> {
        let latest = rounds.first()?;

        let interval_ms = mean_interval_ms(rounds);
        let duration = mean_duration_secs(rounds);

        let prediction = Prediction {
            id: self.take_id(),
            predicted_time: latest.timestamp + Duration::milliseconds(interval_ms),
            predicted_duration: duration.round() as u32,
            source: PredictionSource::Live,
        };
        Some(self.append(prediction))
    }

    /// Record a synthetic prediction from the fallback generator.
    ///
    /// `now` anchors the synthetic next-flight time; the random source is
    /// injected for deterministic tests.
    pub fn record_fallback<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Prediction {
        let synth = fallback::draw(rng);
        let prediction = Prediction {
            id: self.take_id(),
            predicted_time: now + Duration::seconds(synth.delay_secs),
            predicted_duration: synth.duration_secs,
            source: PredictionSource::Fallback,
        };
        self.append(prediction)
    }

    /// The current forecast, mirroring the newest history entry.
    pub fn forecast(&self) -> Forecast {
        self.forecast
    }

    /// Snapshot of the prediction history, newest first.
    pub fn history(&self) -> Vec<Prediction> {
        self.history.snapshot()
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // Step 5 of every cycle: prepend, truncate, refresh the forecast.
    fn append(&mut self, prediction: Prediction) -> Prediction {
        self.forecast = Forecast::from_prediction(&prediction);
        self.history.push(prediction);
        prediction
    }
}
