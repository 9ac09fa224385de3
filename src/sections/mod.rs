//! Presentation sections.
//!
//! Each section owns its private samples and evolves on its own interval
//! while mounted. Landing sections are all live together; dashboard panels
//! are mounted one at a time.
//!
//! | Section | Interval |
//! |---------|----------|
//! | [`Hero`] | 3 s |
//! | [`Monitoring`] | 2 s |
//! | [`PredictiveEngine`] | 3 s |
//! | [`DeviceControl`] | 3 s |
//! | [`Testimonials`] | 8 s |
//! | [`OverviewPanel`] | 3 s |
//! | [`TelemetryPanel`] | 2 s |
//! | [`PredictivePanel`] | 5 s |

mod devices;
mod engine;
mod hero;
mod monitoring;
mod overview;
mod predictive;
mod telemetry;
mod testimonials;

pub use devices::{Device, DeviceControl, DeviceSummary};
pub use engine::{EngineTab, Prediction, PredictiveEngine};
pub use hero::Hero;
pub use monitoring::Monitoring;
pub use overview::{Counters, OverviewPanel};
pub use predictive::{ModelMetrics, PredictivePanel};
pub use telemetry::{TelemetryPanel, METRIC_FILTERS};
pub use testimonials::Testimonials;

use crate::sim::SampleReport;

/// Sections that can be dumped to JSON.
pub trait Report {
    /// Current samples of the section.
    fn samples(&self) -> Vec<SampleReport>;
}

/// Format an integer count with comma thousands separators.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Step `index` by one through `len` entries, wrapping at both ends.
pub(crate) fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1285), "1,285");
        assert_eq!(group_thousands(2_847_291), "2,847,291");
        assert_eq!(group_thousands(-12_500), "-12,500");
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(3, 4, true), 0);
        assert_eq!(cycle(0, 4, false), 3);
        assert_eq!(cycle(0, 0, true), 0);
    }
}
