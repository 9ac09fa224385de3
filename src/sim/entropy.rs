//! Uniform random draws for the simulator.

use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`.
pub trait Entropy: Send + Debug {
    fn unit(&mut self) -> f64;
}

/// `StdRng`-backed entropy.
#[derive(Debug, Clone)]
pub struct SeededEntropy {
    rng: StdRng,
}

impl SeededEntropy {
    /// Deterministic stream for a given seed.
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Non-reproducible stream seeded by the OS.
    pub fn from_os() -> Self {
        Self { rng: StdRng::from_entropy() }
    }
}

impl Entropy for SeededEntropy {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always returns the same draw. `0.5` produces zero drift.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy {
    value: f64,
}

impl FixedEntropy {
    /// Values outside `[0, 1)` are pulled just inside the range.
    pub fn new(value: f64) -> Self {
        let value = if value.is_nan() { 0.5 } else { value.clamp(0.0, 1.0 - f64::EPSILON) };
        Self { value }
    }
}

impl Entropy for FixedEntropy {
    fn unit(&mut self) -> f64 {
        self.value
    }
}

/// Cycles through a scripted list of draws.
#[derive(Debug, Clone)]
pub struct SequenceEntropy {
    values: Vec<f64>,
    next: usize,
}

impl SequenceEntropy {
    /// An empty list behaves like `FixedEntropy::new(0.5)`.
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| FixedEntropy::new(v).value)
            .collect();
        Self { values, next: 0 }
    }
}

impl Entropy for SequenceEntropy {
    fn unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let v = self.values[self.next % self.values.len()];
        self.next = (self.next + 1) % self.values.len();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_draws_in_unit_interval() {
        let mut e = SeededEntropy::new(1);
        for _ in 0..10_000 {
            let u = e.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_fixed_entropy_pulls_into_range() {
        assert!(FixedEntropy::new(1.0).unit() < 1.0);
        assert_eq!(FixedEntropy::new(-2.0).unit(), 0.0);
        assert_eq!(FixedEntropy::new(f64::NAN).unit(), 0.5);
    }

    #[test]
    fn test_sequence_cycles() {
        let mut e = SequenceEntropy::new(vec![0.1, 0.9]);
        assert_eq!(e.unit(), 0.1);
        assert_eq!(e.unit(), 0.9);
        assert_eq!(e.unit(), 0.1);
        assert_eq!(SequenceEntropy::new(Vec::new()).unit(), 0.5);
    }
}
