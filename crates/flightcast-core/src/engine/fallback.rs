//! Fallback generator for synthetic predictions.
//!
//! Used when no live data is available. The random source is injected so
//! tests can seed it deterministically.

use rand::Rng;

use crate::constants::{
    FALLBACK_MAX_DELAY_SECS, FALLBACK_MAX_DURATION_SECS, FALLBACK_MIN_DELAY_SECS,
    FALLBACK_MIN_DURATION_SECS,
};

/// One draw from the fallback distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackDraw {
    /// Seconds from now until the synthetic next-flight time.
    pub delay_secs: i64,
    /// Synthetic flight duration in seconds.
    pub duration_secs: u32,
}

/// Draw a bounded synthetic prediction: next flight in [5, 119] seconds,
/// duration in [1, 30] seconds.
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> FallbackDraw {
    FallbackDraw {
        delay_secs: rng.gen_range(FALLBACK_MIN_DELAY_SECS..=FALLBACK_MAX_DELAY_SECS),
        duration_secs: rng.gen_range(FALLBACK_MIN_DURATION_SECS..=FALLBACK_MAX_DURATION_SECS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draws_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let d = draw(&mut rng);
            assert!((FALLBACK_MIN_DELAY_SECS..=FALLBACK_MAX_DELAY_SECS).contains(&d.delay_secs));
            assert!(
                (FALLBACK_MIN_DURATION_SECS..=FALLBACK_MAX_DURATION_SECS)
                    .contains(&d.duration_secs)
            );
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(draw(&mut a), draw(&mut b));
        }
    }

    #[test]
    fn different_seeds_eventually_differ() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        let differs = (0..100).any(|_| draw(&mut a) != draw(&mut b));
        assert!(differs);
    }
}
