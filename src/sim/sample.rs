//! Metric samples and their static descriptions.

use serde::Serialize;

use super::generator::{initialize, Clamp};
use super::status::{Classifier, Status};
use super::Simulator;

/// Immutable description of a simulated metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub baseline: f64,
    /// Width of the jitter window; each tick moves at most half of this.
    pub magnitude: f64,
    pub clamp: Option<Clamp>,
    /// Decimal places when displayed.
    pub precision: usize,
}

impl MetricSpec {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        unit: &'static str,
        baseline: f64,
        magnitude: f64,
    ) -> Self {
        Self {
            key,
            label,
            unit,
            baseline,
            magnitude,
            clamp: None,
            precision: 1,
        }
    }

    /// Restrict values to `[min, max]`. Requires `min <= baseline <= max`.
    pub const fn clamped(self, min: f64, max: f64) -> Self {
        Self {
            clamp: Some(Clamp::fixed(min, max)),
            ..self
        }
    }

    pub const fn precision(self, precision: usize) -> Self {
        Self { precision, ..self }
    }
}

/// A named, unit-tagged value refreshed on every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    spec: MetricSpec,
    pub value: f64,
    pub status: Option<Status>,
}

/// Serializable view of a sample.
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl MetricSample {
    /// Create a sample at its baseline.
    pub fn mount(spec: MetricSpec) -> Self {
        Self {
            value: initialize(spec.baseline, spec.clamp),
            spec,
            status: None,
        }
    }

    /// Advance one tick.
    pub fn step(&mut self, sim: &mut Simulator) {
        self.value = sim.tick(self.value, self.spec.magnitude, self.spec.clamp);
    }

    /// Recompute `status` from the current value.
    pub fn classify(&mut self, classifier: &Classifier<Status>) {
        self.status = Some(classifier.classify(self.value));
    }

    pub fn spec(&self) -> &MetricSpec {
        &self.spec
    }

    pub fn key(&self) -> &'static str {
        self.spec.key
    }

    pub fn label(&self) -> &'static str {
        self.spec.label
    }

    pub fn unit(&self) -> &'static str {
        self.spec.unit
    }

    /// Value rounded to the spec's precision.
    pub fn display(&self) -> String {
        format!("{:.*}", self.spec.precision, self.value)
    }

    pub fn report(&self) -> SampleReport {
        SampleReport {
            key: self.spec.key,
            label: self.spec.label,
            value: self.value,
            unit: self.spec.unit,
            display: self.display(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::status::Comparison;
    use crate::sim::{ManualClock, SeededEntropy};

    const UPTIME: MetricSpec = MetricSpec::new("uptime", "Uptime", "%", 99.7, 0.5).clamped(95.0, 100.0);

    #[test]
    fn test_mount_starts_at_baseline() {
        let s = MetricSample::mount(UPTIME);
        assert_eq!(s.value, 99.7);
        assert_eq!(s.display(), "99.7");
        assert!(s.status.is_none());
    }

    #[test]
    fn test_uptime_thousand_ticks() {
        let mut sim = Simulator::new(Box::new(ManualClock::new()), Box::new(SeededEntropy::new(11)));
        let excellent = Classifier::otherwise(Status::Good).when(Comparison::Gt, 99.0, Status::Excellent);
        let mut s = MetricSample::mount(UPTIME);
        for _ in 0..1000 {
            s.step(&mut sim);
            s.classify(&excellent);
            assert!((95.0..=100.0).contains(&s.value));
            let expected = if s.value > 99.0 { Status::Excellent } else { Status::Good };
            assert_eq!(s.status, Some(expected));
        }
    }

    #[test]
    fn test_zero_precision_display() {
        let spec = MetricSpec::new("pressure", "Pressure", "hPa", 1013.4, 20.0).precision(0);
        assert_eq!(MetricSample::mount(spec).display(), "1013");
    }

    #[test]
    fn test_report_carries_status() {
        let mut s = MetricSample::mount(MetricSpec::new("voltage", "Voltage", "V", 220.0, 10.0));
        s.classify(&Classifier::otherwise(Status::Low).when(Comparison::Gt, 200.0, Status::Normal));
        let json = serde_json::to_value(s.report()).unwrap();
        assert_eq!(json["status"], "Normal");
        assert_eq!(json["display"], "220.0");
        assert_eq!(json["unit"], "V");
    }
}
