//! Prediction and polling constants for flightcast.

use std::time::Duration;

// =============================================================================
// Endpoint Constants
// =============================================================================

/// Default base URL for the game-outcome API.
pub const DEFAULT_API_BASE: &str = "https://aviator-api.spribe.io/s";

/// Path of the recent-games endpoint, relative to the base URL.
pub const RECENT_GAMES_PATH: &str = "/recent-games";

// =============================================================================
// Timing Constants
// =============================================================================

/// Period between scheduled fetch cycles.
pub const POLL_PERIOD: Duration = Duration::from_secs(30);

/// Per-request HTTP timeout. A hung request stalls at most one cycle.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Prediction Constants
// =============================================================================

/// Mean inter-round interval assumed when fewer than two rounds are known.
pub const DEFAULT_INTERVAL_MS: i64 = 30_000;

/// Mean round duration (seconds) assumed when no rounds are known.
pub const DEFAULT_DURATION_SECS: f64 = 15.0;

/// Maximum number of predictions retained in the rolling history.
pub const HISTORY_CAPACITY: usize = 10;

// =============================================================================
// Fallback Constants
// =============================================================================

/// Minimum delay from now for a synthetic next-flight time, in seconds.
pub const FALLBACK_MIN_DELAY_SECS: i64 = 5;

/// Maximum delay from now for a synthetic next-flight time, in seconds.
pub const FALLBACK_MAX_DELAY_SECS: i64 = 119;

/// Minimum synthetic flight duration, in seconds.
pub const FALLBACK_MIN_DURATION_SECS: u32 = 1;

/// Maximum synthetic flight duration, in seconds.
pub const FALLBACK_MAX_DURATION_SECS: u32 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_constants_are_ordered() {
        assert!(FETCH_TIMEOUT < POLL_PERIOD);
    }

    #[test]
    fn fallback_ranges_are_valid() {
        assert!(FALLBACK_MIN_DELAY_SECS < FALLBACK_MAX_DELAY_SECS);
        assert!(FALLBACK_MIN_DURATION_SECS < FALLBACK_MAX_DURATION_SECS);
        assert!(FALLBACK_MIN_DELAY_SECS > 0);
        assert!(FALLBACK_MIN_DURATION_SECS > 0);
    }

    #[test]
    fn prediction_defaults() {
        assert_eq!(DEFAULT_INTERVAL_MS, 30_000);
        assert_eq!(DEFAULT_DURATION_SECS, 15.0);
        assert_eq!(HISTORY_CAPACITY, 10);
    }

    #[test]
    fn recent_games_path_is_rooted() {
        assert!(RECENT_GAMES_PATH.starts_with('/'));
    }
}
