//! Terminal rendering of the current forecast and prediction history.
//!
//! Presentation plumbing only: reads snapshots from the handle and formats
//! them. No state of its own.

use chrono::{DateTime, Utc};

use flightcast_core::model::Prediction;

use crate::controller::PredictorHandle;

/// Placeholder shown before the first prediction.
const UNSET_TIME: &str = "--:--:--";

/// Render the full status block: forecast, countdown, error banner, history.
pub fn render(handle: &PredictorHandle) -> String {
    render_at(handle, Utc::now())
}

// Split out so tests can pin "now".
fn render_at(handle: &PredictorHandle, now: DateTime<Utc>) -> String {
    let forecast = handle.forecast();
    let mut out = String::new();

    out.push_str("FLIGHTCAST\n");
    out.push_str(&format!(
        "Next flight:        {}\n",
        forecast
            .next_flight_time
            .map(format_time)
            .unwrap_or_else(|| UNSET_TIME.to_string())
    ));
    out.push_str(&format!(
        "Time remaining:     {}\n",
        forecast
            .next_flight_time
            .map(|t| format_remaining(t, now))
            .unwrap_or_else(|| "Unknown".to_string())
    ));
    out.push_str(&format!(
        "Estimated duration: {}\n",
        forecast
            .flight_duration
            .map(|d| format!("{d} seconds"))
            .unwrap_or_else(|| "--".to_string())
    ));

    if let Some(error) = handle.last_error() {
        out.push_str(&format!("\n!! {error}\n"));
    }

    out.push_str("\nPrediction history\n");
    let history = handle.history();
    if history.is_empty() {
        out.push_str("  No predictions yet\n");
    } else {
        for prediction in &history {
            out.push_str(&format_history_line(prediction));
        }
    }

    out
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Countdown to the next flight as `m:ss`, or "Now!" once due.
fn format_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (target - now).num_seconds();
    if diff <= 0 {
        return "Now!".to_string();
    }
    format!("{}:{:02}", diff / 60, diff % 60)
}

fn format_history_line(prediction: &Prediction) -> String {
    format!(
        "  #{:<4} {}  {:>2}s  [{}]\n",
        prediction.id,
        format_time(prediction.predicted_time),
        prediction.predicted_duration,
        prediction.source
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use flightcast_core::model::GameRound;
    use flightcast_core::PredictorConfig;

    use crate::gateway::GameSource;
    use crate::poller::Poller;

    struct NullSource;

    #[async_trait::async_trait]
    impl GameSource for NullSource {
        async fn fetch_recent_games(&self) -> flightcast_core::Result<Vec<GameRound>> {
            Ok(vec![])
        }
    }

    fn empty_handle() -> PredictorHandle {
        let (_poller, handle) =
            Poller::new(Box::new(NullSource), &PredictorConfig::default(), Some(0));
        handle
    }

    #[test]
    fn renders_placeholders_before_first_cycle() {
        let output = render(&empty_handle());
        assert!(output.contains(UNSET_TIME));
        assert!(output.contains("Unknown"));
        assert!(output.contains("No predictions yet"));
        assert!(!output.contains("!!"));
    }

    #[test]
    fn remaining_counts_down_and_hits_now() {
        let now = Utc.timestamp_millis_opt(0).unwrap();
        let soon = Utc.timestamp_millis_opt(90_000).unwrap();
        assert_eq!(format_remaining(soon, now), "1:30");
        assert_eq!(format_remaining(now, now), "Now!");
        assert_eq!(format_remaining(now, soon), "Now!");
    }

    #[test]
    fn remaining_pads_seconds() {
        let now = Utc.timestamp_millis_opt(0).unwrap();
        let target = Utc.timestamp_millis_opt(65_000).unwrap();
        assert_eq!(format_remaining(target, now), "1:05");
    }
}
