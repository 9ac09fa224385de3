//! Synthetic telemetry generation.
//!
//! Every number the console shows comes from this module: baselines are
//! perturbed by bounded random deltas on a fixed cadence, optionally clamped,
//! and classified into status labels by ordered threshold rules.
//!
//! ## Submodules
//!
//! - [`generator`]: Pure tick arithmetic ([`tick`], [`count_step`], [`Clamp`])
//! - [`clock`]: Time sources ([`SystemClock`], [`ManualClock`])
//! - [`entropy`]: Uniform draws ([`SeededEntropy`], [`FixedEntropy`], [`SequenceEntropy`])
//! - [`status`]: First-match-wins threshold classification ([`Classifier`])
//! - [`sample`]: The [`MetricSample`] record and its immutable [`MetricSpec`]
//! - [`series`]: Rolling chart history and sparkline normalization
//! - [`ticker`]: Cooperative interval timers and [`Mounted`] sections
//! - [`feed`]: Async tokio feed publishing section snapshots
//!
//! ## Data Flow
//!
//! ```text
//! MetricSpec (static baseline)
//!        │
//!        ▼
//! MetricSample::mount()
//!        │
//!        ▼  every interval (Ticker / Feed)
//! Simulator::tick() ──▶ Clamp ──▶ Classifier ──▶ ui
//! ```

pub mod clock;
pub mod entropy;
pub mod feed;
pub mod generator;
pub mod sample;
pub mod series;
pub mod status;
pub mod ticker;

use std::fmt::Debug;
use std::time::Duration;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entropy::{Entropy, FixedEntropy, SeededEntropy, SequenceEntropy};
pub use feed::Feed;
pub use generator::{count_step, initialize, tick, Clamp};
pub use sample::{MetricSample, MetricSpec, SampleReport};
pub use series::{Series, Wave, Waveform};
pub use status::{Comparison, Classifier, Rule, Status, Tone};
pub use ticker::{Mounted, Section, Ticker};

/// The single injectable time + randomness source.
///
/// Sections never read the wall clock or a global RNG directly; they draw
/// through a `Simulator` so tests can substitute a [`ManualClock`] and a
/// [`FixedEntropy`] or seeded [`SeededEntropy`].
#[derive(Debug)]
pub struct Simulator {
    clock: Box<dyn Clock>,
    entropy: Box<dyn Entropy>,
}

impl Simulator {
    /// Create a simulator from a clock and an entropy source.
    pub fn new(clock: Box<dyn Clock>, entropy: Box<dyn Entropy>) -> Self {
        Self { clock, entropy }
    }

    /// Wall clock with OS-seeded randomness.
    pub fn system() -> Self {
        Self::new(Box::new(SystemClock::new()), Box::new(SeededEntropy::from_os()))
    }

    /// Wall clock with a fixed seed, so a run's values are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(SystemClock::new()), Box::new(SeededEntropy::new(seed)))
    }

    /// Time elapsed since the clock's epoch.
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// A uniform draw in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.entropy.unit()
    }

    /// Perturb `previous` by a uniform delta in `[-magnitude/2, magnitude/2]`.
    pub fn tick(&mut self, previous: f64, magnitude: f64, clamp: Option<Clamp>) -> f64 {
        let u = self.entropy.unit();
        generator::tick(previous, magnitude, clamp, u)
    }

    /// Integer step `floor(u * span + offset)`.
    pub fn count_step(&mut self, offset: f64, span: f64) -> i64 {
        let u = self.entropy.unit();
        generator::count_step(offset, span, u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_half_draw_never_drifts() {
        let mut sim = Simulator::new(Box::new(ManualClock::new()), Box::new(FixedEntropy::new(0.5)));
        let mut v = 68.5;
        for _ in 0..100 {
            v = sim.tick(v, 2.0, None);
        }
        assert_eq!(v, 68.5);
    }

    #[test]
    fn test_seeded_simulators_agree() {
        let mut a = Simulator::new(Box::new(ManualClock::new()), Box::new(SeededEntropy::new(7)));
        let mut b = Simulator::new(Box::new(ManualClock::new()), Box::new(SeededEntropy::new(7)));
        for _ in 0..50 {
            assert_eq!(a.tick(220.0, 10.0, None), b.tick(220.0, 10.0, None));
        }
    }

    #[test]
    fn test_now_follows_manual_clock() {
        let clock = ManualClock::new();
        let sim = Simulator::new(Box::new(clock.clone()), Box::new(FixedEntropy::new(0.5)));
        clock.advance(Duration::from_millis(2500));
        assert_eq!(sim.now(), Duration::from_millis(2500));
    }
}
