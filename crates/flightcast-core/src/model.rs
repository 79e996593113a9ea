//! Round and prediction data model.

use chrono::{DateTime, Utc};

/// One observed past occurrence of the recurring game round.
///
/// Rounds arrive newest-first from the gateway and are immutable once
/// received. `duration` is non-negative by construction at the gateway
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameRound {
    /// When the round started.
    pub timestamp: DateTime<Utc>,
    /// How long the round lasted, in seconds.
    pub duration: f64,
}

/// Provenance of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionSource {
    /// Derived from a successful gateway response.
    Live,
    /// Synthesized by the fallback generator.
    Fallback,
}

impl std::fmt::Display for PredictionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictionSource::Live => write!(f, "Live"),
            PredictionSource::Fallback => write!(f, "Fallback"),
        }
    }
}

/// One prediction cycle's output. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Unique monotonic identifier, assigned by the engine.
    pub id: u64,
    /// Predicted start time of the next flight.
    pub predicted_time: DateTime<Utc>,
    /// Predicted flight duration in whole seconds.
    pub predicted_duration: u32,
    /// Whether this prediction came from live data or the fallback path.
    pub source: PredictionSource,
}

/// The most recently computed forecast, derived from the latest prediction.
///
/// Exactly one instance exists at a time; it is overwritten on every cycle
/// and always mirrors the newest history entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Forecast {
    /// Predicted start time of the next flight, if any cycle has run.
    pub next_flight_time: Option<DateTime<Utc>>,
    /// Predicted flight duration in seconds, if any cycle has run.
    pub flight_duration: Option<u32>,
}

impl Forecast {
    /// Build a forecast mirroring the given prediction.
    pub fn from_prediction(prediction: &Prediction) -> Self {
        Self {
            next_flight_time: Some(prediction.predicted_time),
            flight_duration: Some(prediction.predicted_duration),
        }
    }

    /// True until the first cycle has produced a prediction.
    pub fn is_unset(&self) -> bool {
        self.next_flight_time.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn source_display() {
        assert_eq!(PredictionSource::Live.to_string(), "Live");
        assert_eq!(PredictionSource::Fallback.to_string(), "Fallback");
    }

    #[test]
    fn forecast_default_is_unset() {
        let forecast = Forecast::default();
        assert!(forecast.is_unset());
        assert_eq!(forecast.next_flight_time, None);
        assert_eq!(forecast.flight_duration, None);
    }

    #[test]
    fn forecast_mirrors_prediction() {
        let prediction = Prediction {
            id: 7,
            predicted_time: Utc.timestamp_millis_opt(31_000).unwrap(),
            predicted_duration: 20,
            source: PredictionSource::Live,
        };
        let forecast = Forecast::from_prediction(&prediction);
        assert!(!forecast.is_unset());
        assert_eq!(forecast.next_flight_time, Some(prediction.predicted_time));
        assert_eq!(forecast.flight_duration, Some(20));
    }
}
