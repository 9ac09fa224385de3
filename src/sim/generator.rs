//! Tick arithmetic for simulated metrics.
//!
//! All functions here are pure: the uniform draw is passed in, so callers
//! decide where randomness comes from.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Inclusive `[min, max]` bound applied after every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clamp {
    min: f64,
    max: f64,
}

impl Clamp {
    /// Build a clamp range, rejecting inverted or non-finite bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFinite("clamp bound"));
        }
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Compile-time clamp for the built-in metric tables.
    ///
    /// Callers must pass `min <= max`.
    pub(crate) const fn fixed(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Constrain `value` into the range.
    pub fn apply(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Initial value of a metric: its baseline.
///
/// The baseline is expected to lie inside `clamp` when one is given; it is
/// returned unchanged either way.
pub fn initialize(baseline: f64, _clamp: Option<Clamp>) -> f64 {
    baseline
}

/// One update step: `previous + (u - 0.5) * magnitude`, then clamped.
///
/// `u` is a uniform draw in `[0, 1)`, so the delta lies in
/// `[-magnitude/2, magnitude/2]`. A magnitude of zero returns `previous`.
pub fn tick(previous: f64, magnitude: f64, clamp: Option<Clamp>, u: f64) -> f64 {
    let next = previous + (u - 0.5) * magnitude;
    match clamp {
        Some(c) => c.apply(next),
        None => next,
    }
}

/// Integer counter step: `floor(u * span + offset)`.
pub fn count_step(offset: f64, span: f64, u: f64) -> i64 {
    (u * span + offset).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entropy::{Entropy, SeededEntropy};

    #[test]
    fn test_initialize_returns_baseline() {
        assert_eq!(initialize(99.7, Some(Clamp::fixed(95.0, 100.0))), 99.7);
        assert_eq!(initialize(-3.0, None), -3.0);
    }

    #[test]
    fn test_clamped_ticks_stay_in_range() {
        let mut rng = SeededEntropy::new(42);
        for &(baseline, min, max, magnitude) in &[
            (99.7, 95.0, 100.0, 0.5),
            (87.0, 70.0, 95.0, 5.0),
            (0.0, 0.0, 100.0, 40.0),
            (50.0, 50.0, 50.0, 3.0),
        ] {
            let clamp = Clamp::new(min, max).unwrap();
            let mut v = initialize(baseline, Some(clamp));
            for _ in 0..2000 {
                v = tick(v, magnitude, Some(clamp), rng.unit());
                assert!(clamp.contains(v), "{} escaped [{}, {}]", v, min, max);
            }
        }
    }

    #[test]
    fn test_unclamped_tick_is_bounded_by_half_magnitude() {
        let mut rng = SeededEntropy::new(3);
        let mut v = 220.0;
        for _ in 0..2000 {
            let next = tick(v, 10.0, None, rng.unit());
            assert!(next >= v - 5.0 && next <= v + 5.0);
            v = next;
        }
    }

    #[test]
    fn test_draw_extremes_hit_the_bounds() {
        assert_eq!(tick(10.0, 4.0, None, 0.0), 8.0);
        assert!(tick(10.0, 4.0, None, 0.999_999) < 12.0);
    }

    #[test]
    fn test_zero_magnitude_is_identity() {
        for u in [0.0, 0.25, 0.5, 0.9] {
            assert_eq!(tick(1013.2, 0.0, None, u), 1013.2);
        }
        // Still subject to clamping
        let clamp = Clamp::new(95.0, 100.0).unwrap();
        assert_eq!(tick(101.0, 0.0, Some(clamp), 0.3), 100.0);
    }

    #[test]
    fn test_count_steps() {
        assert_eq!(count_step(-1.0, 3.0, 0.0), -1);
        assert_eq!(count_step(-1.0, 3.0, 0.5), 0);
        assert_eq!(count_step(-1.0, 3.0, 0.99), 1);
        assert_eq!(count_step(50.0, 100.0, 0.0), 50);
        assert_eq!(count_step(50.0, 100.0, 0.999), 149);
        assert_eq!(count_step(1.0, 5.0, 0.999), 5);
    }

    #[test]
    fn test_clamp_rejects_bad_bounds() {
        assert!(Clamp::new(10.0, 5.0).is_err());
        assert!(Clamp::new(f64::NAN, 5.0).is_err());
        assert!(Clamp::new(5.0, 5.0).is_ok());
    }
}
