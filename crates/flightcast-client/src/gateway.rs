//! Data source gateway for the recent-games endpoint.
//!
//! One request per cycle, no internal retries — retry cadence is the
//! scheduler's job. The [`GameSource`] trait is the seam the scheduler is
//! tested through.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

use flightcast_core::constants::RECENT_GAMES_PATH;
use flightcast_core::model::GameRound;
use flightcast_core::{Error, PredictorConfig, Result};

/// Source of recent game rounds.
///
/// Returns rounds newest-first as delivered by the remote — no reordering.
/// `Ok(vec![])` means a valid response with nothing new ("empty update");
/// any transport failure, non-2xx status, or malformed body is
/// [`Error::Fetch`].
#[async_trait]
pub trait GameSource: Send + Sync {
    async fn fetch_recent_games(&self) -> Result<Vec<GameRound>>;
}

/// HTTP gateway performing `GET <base>/recent-games`.
pub struct HttpGameSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGameSource {
    /// Build a gateway from the predictor config.
    ///
    /// The per-request timeout comes from `config.fetch_timeout`, so a hung
    /// request stalls at most one cycle.
    pub fn new(config: &PredictorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .map_err(Error::fetch)?;
        Ok(Self {
            client,
            base_url: config.api_base.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl GameSource for HttpGameSource {
    async fn fetch_recent_games(&self) -> Result<Vec<GameRound>> {
        let url = format!("{}{}", self.base_url, RECENT_GAMES_PATH);

        let response = self.client.get(&url).send().await.map_err(Error::fetch)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(format!("HTTP {status}")));
        }

        let body: RecentGames = response
            .json()
            .await
            .map_err(|e| Error::fetch(format!("invalid response body: {e}")))?;

        let rounds = decode_rounds(body)?;
        if rounds.is_empty() {
            debug!("recent-games returned no rounds");
        }
        Ok(rounds)
    }
}

// =============================================================================
// Wire format
// =============================================================================

/// Response shape of the recent-games endpoint. A missing `games` field is
/// a decode failure (routed to fallback); a present-but-empty list is not.
#[derive(Debug, Deserialize)]
struct RecentGames {
    games: Vec<WireRound>,
}

#[derive(Debug, Deserialize)]
struct WireRound {
    timestamp: WireTimestamp,
    duration: f64,
}

/// Timestamps arrive either as epoch milliseconds or as an RFC 3339 string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireTimestamp {
    Millis(i64),
    Text(String),
}

impl WireTimestamp {
    fn parse(&self) -> Result<DateTime<Utc>> {
        match self {
            WireTimestamp::Millis(ms) => Utc
                .timestamp_millis_opt(*ms)
                .single()
                .ok_or_else(|| Error::fetch(format!("timestamp out of range: {ms}"))),
            WireTimestamp::Text(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| Error::fetch(format!("unparseable timestamp {s:?}: {e}"))),
        }
    }
}

fn decode_rounds(body: RecentGames) -> Result<Vec<GameRound>> {
    body.games
        .into_iter()
        .map(|wire| {
            let timestamp = wire.timestamp.parse()?;
            // Durations are non-negative by contract; clamp anything the
            // remote gets wrong rather than letting it skew the mean.
            let duration = if wire.duration.is_finite() && wire.duration >= 0.0 {
                wire.duration
            } else {
                warn!(duration = wire.duration, "clamping malformed round duration");
                0.0
            };
            Ok(GameRound {
                timestamp,
                duration,
            })
        })
        .collect()
}
