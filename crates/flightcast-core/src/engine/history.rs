//! Bounded, newest-first prediction history.

use std::collections::VecDeque;

use crate::constants::HISTORY_CAPACITY;
use crate::model::Prediction;

/// Rolling log of the most recent predictions, newest first.
///
/// Bounded to [`HISTORY_CAPACITY`] entries; the oldest entry is evicted on
/// overflow. Owned exclusively by the prediction engine; readers only see
/// snapshots.
#[derive(Debug, Default)]
pub struct PredictionHistory {
    entries: VecDeque<Prediction>,
}

impl PredictionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a prediction, evicting the oldest entry past capacity.
    pub fn push(&mut self, prediction: Prediction) {
        self.entries.push_front(prediction);
        if self.entries.len() > HISTORY_CAPACITY {
            if let Some(evicted) = self.entries.pop_back() {
                tracing::trace!(id = evicted.id, "evicting oldest prediction");
            }
        }
    }

    /// The most recently appended prediction.
    pub fn latest(&self) -> Option<&Prediction> {
        self.entries.front()
    }

    /// Number of retained predictions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no prediction has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the history, newest first.
    pub fn snapshot(&self) -> Vec<Prediction> {
        self.entries.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PredictionSource;
    use chrono::{TimeZone, Utc};

    fn prediction(id: u64) -> Prediction {
        Prediction {
            id,
            predicted_time: Utc.timestamp_millis_opt(id as i64 * 1000).unwrap(),
            predicted_duration: 10,
            source: PredictionSource::Live,
        }
    }

    #[test]
    fn newest_first_order() {
        let mut history = PredictionHistory::new();
        history.push(prediction(1));
        history.push(prediction(2));
        history.push(prediction(3));

        let snapshot = history.snapshot();
        assert_eq!(snapshot[0].id, 3);
        assert_eq!(snapshot[1].id, 2);
        assert_eq!(snapshot[2].id, 1);
        assert_eq!(history.latest().map(|p| p.id), Some(3));
    }

    #[test]
    fn eleventh_insert_evicts_oldest() {
        let mut history = PredictionHistory::new();
        for id in 1..=11 {
            history.push(prediction(id));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        let snapshot = history.snapshot();
        assert_eq!(snapshot.first().map(|p| p.id), Some(11));
        // Oldest (id 1) was evicted; the tail is id 2.
        assert_eq!(snapshot.last().map(|p| p.id), Some(2));
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut history = PredictionHistory::new();
        for id in 0..100 {
            history.push(prediction(id));
            assert!(history.len() <= HISTORY_CAPACITY);
        }
    }

    #[test]
    fn empty_history() {
        let history = PredictionHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert!(history.snapshot().is_empty());
    }
}
