//! Rolling chart history for the telemetry panel.

use std::collections::VecDeque;
use std::time::Duration;

use serde::Serialize;

use super::Simulator;

/// Number of points kept per chart.
pub const SERIES_LEN: usize = 20;

/// Sparkline characters (8 levels of height).
pub const SPARKLINE_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Wave {
    Sin,
    Cos,
}

/// `base + wave(t * frequency) * amplitude + u * noise`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waveform {
    pub base: f64,
    pub wave: Wave,
    pub frequency: f64,
    pub amplitude: f64,
    pub noise: f64,
}

impl Waveform {
    /// Value at phase `t` with draw `u`.
    pub fn at(&self, t: f64, u: f64) -> f64 {
        let w = match self.wave {
            Wave::Sin => (t * self.frequency).sin(),
            Wave::Cos => (t * self.frequency).cos(),
        };
        self.base + w * self.amplitude + u * self.noise
    }
}

/// One chart point: the simulated time it was taken and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub at_ms: u64,
    pub value: f64,
}

/// Fixed-length history of a waveform.
#[derive(Debug, Clone)]
pub struct Series {
    waveform: Waveform,
    points: VecDeque<Point>,
}

impl Series {
    /// Pre-fill [`SERIES_LEN`] points spaced one minute apart, ending at `now`.
    ///
    /// The initial points use `index * seed_step` as the phase; live points
    /// use the clock in milliseconds.
    pub fn seed(waveform: Waveform, seed_step: f64, sim: &mut Simulator) -> Self {
        let now_ms = sim.now().as_millis() as u64;
        let minute = Duration::from_secs(60).as_millis() as u64;
        let points = (0..SERIES_LEN)
            .map(|i| {
                let back = (SERIES_LEN - 1 - i) as u64 * minute;
                Point {
                    at_ms: now_ms.saturating_sub(back),
                    value: waveform.at(i as f64 * seed_step, sim.unit()),
                }
            })
            .collect();
        Self { waveform, points }
    }

    /// Drop the oldest point and append one sampled at the current time.
    pub fn push_now(&mut self, sim: &mut Simulator) {
        let now_ms = sim.now().as_millis() as u64;
        let value = self.waveform.at(now_ms as f64, sim.unit());
        self.points.push_back(Point { at_ms: now_ms, value });
        while self.points.len() > SERIES_LEN {
            self.points.pop_front();
        }
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<f64> {
        self.points.back().map(|p| p.value)
    }

    pub fn min(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }

    /// Values normalized to 0-7 for 8 bar levels. A flat series sits mid-height.
    pub fn levels(&self) -> Vec<u8> {
        let (Some(min), Some(max)) = (self.min(), self.max()) else {
            return Vec::new();
        };
        let range = max - min;
        self.points
            .iter()
            .map(|p| {
                if range > 0.0 {
                    (((p.value - min) / range) * 7.0).round().clamp(0.0, 7.0) as u8
                } else {
                    3
                }
            })
            .collect()
    }

    /// Render as a string of block characters.
    pub fn sparkline(&self) -> String {
        self.levels().into_iter().map(|v| SPARKLINE_CHARS[v.min(7) as usize]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FixedEntropy, ManualClock};

    const TEMPERATURE: Waveform = Waveform {
        base: 65.0,
        wave: Wave::Sin,
        frequency: 1.0,
        amplitude: 5.0,
        noise: 2.0,
    };

    fn sim(clock: &ManualClock, u: f64) -> Simulator {
        Simulator::new(Box::new(clock.clone()), Box::new(FixedEntropy::new(u)))
    }

    #[test]
    fn test_waveform_value() {
        assert_eq!(TEMPERATURE.at(0.0, 0.0), 65.0);
        assert_eq!(TEMPERATURE.at(0.0, 0.5), 66.0);
        let cos = Waveform { wave: Wave::Cos, ..TEMPERATURE };
        assert_eq!(cos.at(0.0, 0.0), 70.0);
    }

    #[test]
    fn test_seed_fills_window() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(3600));
        let mut sim = sim(&clock, 0.0);
        let series = Series::seed(TEMPERATURE, 0.3, &mut sim);
        assert_eq!(series.len(), SERIES_LEN);
        let first = series.points().next().unwrap();
        assert_eq!(first.at_ms, 3_600_000 - 19 * 60_000);
        assert_eq!(first.value, 65.0);
    }

    #[test]
    fn test_push_keeps_length() {
        let clock = ManualClock::new();
        let mut sim = sim(&clock, 0.5);
        let mut series = Series::seed(TEMPERATURE, 0.3, &mut sim);
        for _ in 0..50 {
            clock.advance(Duration::from_millis(2000));
            series.push_now(&mut sim);
        }
        assert_eq!(series.len(), SERIES_LEN);
        assert_eq!(series.points().last().unwrap().at_ms, 100_000);
    }

    #[test]
    fn test_levels_span_full_range() {
        let clock = ManualClock::new();
        let mut sim = sim(&clock, 0.0);
        let series = Series::seed(TEMPERATURE, 0.3, &mut sim);
        let levels = series.levels();
        assert_eq!(levels.len(), SERIES_LEN);
        assert_eq!(*levels.iter().min().unwrap(), 0);
        assert_eq!(*levels.iter().max().unwrap(), 7);
        assert_eq!(series.sparkline().chars().count(), SERIES_LEN);
    }

    #[test]
    fn test_flat_series_is_mid_height() {
        let clock = ManualClock::new();
        let mut sim = sim(&clock, 0.0);
        let flat = Waveform { amplitude: 0.0, noise: 0.0, ..TEMPERATURE };
        let series = Series::seed(flat, 0.3, &mut sim);
        assert!(series.levels().iter().all(|&l| l == 3));
    }
}
