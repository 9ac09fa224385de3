//! Live IoT monitoring tiles on the landing page.

use std::time::Duration;

use crate::config::Thresholds;
use crate::sim::{Classifier, MetricSample, MetricSpec, SampleReport, Section, Simulator, Status};

use super::Report;

const VOLTAGE: MetricSpec = MetricSpec::new("voltage", "Voltage", "V", 220.0, 10.0);
const TEMPERATURE: MetricSpec = MetricSpec::new("temperature", "Temperature", "°C", 65.0, 5.0);
const PRESSURE: MetricSpec = MetricSpec::new("pressure", "Pressure", "hPa", 1013.0, 20.0).precision(0);
const UPTIME: MetricSpec = MetricSpec::new("uptime", "Uptime", "%", 99.7, 0.5).clamped(95.0, 100.0);

/// Four jittering gauges, each with its own status rule.
#[derive(Debug, Clone)]
pub struct Monitoring {
    gauges: [(MetricSample, Classifier<Status>); 4],
}

impl Monitoring {
    pub fn new(thresholds: &Thresholds) -> Self {
        let mut gauges = [
            (MetricSample::mount(VOLTAGE), thresholds.monitoring_voltage()),
            (MetricSample::mount(TEMPERATURE), thresholds.monitoring_temperature()),
            (MetricSample::mount(PRESSURE), thresholds.monitoring_pressure()),
            (MetricSample::mount(UPTIME), thresholds.monitoring_uptime()),
        ];
        for (sample, rule) in gauges.iter_mut() {
            sample.classify(rule);
        }
        Self { gauges }
    }

    pub fn gauges(&self) -> impl Iterator<Item = &MetricSample> {
        self.gauges.iter().map(|(s, _)| s)
    }

    pub fn get(&self, key: &str) -> Option<&MetricSample> {
        self.gauges().find(|s| s.key() == key)
    }
}

impl Section for Monitoring {
    fn name(&self) -> &'static str {
        "monitoring"
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(2000)
    }

    fn on_tick(&mut self, sim: &mut Simulator) {
        for (sample, rule) in self.gauges.iter_mut() {
            sample.step(sim);
            sample.classify(rule);
        }
    }
}

impl Report for Monitoring {
    fn samples(&self) -> Vec<SampleReport> {
        self.gauges().map(MetricSample::report).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ManualClock, SeededEntropy, SequenceEntropy};

    #[test]
    fn test_initial_statuses() {
        let m = Monitoring::new(&Thresholds::default());
        assert_eq!(m.get("voltage").unwrap().status, Some(Status::Normal));
        assert_eq!(m.get("temperature").unwrap().status, Some(Status::Normal));
        assert_eq!(m.get("pressure").unwrap().display(), "1013");
        assert_eq!(m.get("uptime").unwrap().status, Some(Status::Excellent));
    }

    #[test]
    fn test_tick_moves_within_half_magnitude() {
        // u = 0 pulls every gauge down by half its magnitude
        let mut sim = Simulator::new(Box::new(ManualClock::new()), Box::new(SequenceEntropy::new(vec![0.0])));
        let mut m = Monitoring::new(&Thresholds::default());
        m.on_tick(&mut sim);
        assert_eq!(m.get("voltage").unwrap().value, 215.0);
        assert_eq!(m.get("temperature").unwrap().value, 62.5);
        assert_eq!(m.get("pressure").unwrap().value, 1003.0);
        assert!((m.get("uptime").unwrap().value - 99.45).abs() < 1e-9);
    }

    #[test]
    fn test_uptime_stays_clamped() {
        let mut sim = Simulator::new(Box::new(ManualClock::new()), Box::new(SeededEntropy::new(3)));
        let mut m = Monitoring::new(&Thresholds::default());
        let clamp = m.get("uptime").unwrap().spec().clamp.unwrap();
        assert_eq!((clamp.min(), clamp.max()), (95.0, 100.0));
        assert!(m.get("voltage").unwrap().spec().clamp.is_none());
        for _ in 0..500 {
            m.on_tick(&mut sim);
            let uptime = m.get("uptime").unwrap();
            assert!(clamp.contains(uptime.value));
        }
    }

    #[test]
    fn test_report_lists_all_gauges() {
        let m = Monitoring::new(&Thresholds::default());
        let keys: Vec<_> = m.samples().iter().map(|r| r.key).collect();
        assert_eq!(keys, ["voltage", "temperature", "pressure", "uptime"]);
    }
}
