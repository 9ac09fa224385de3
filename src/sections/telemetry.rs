//! Telemetry panel: current readings plus rolling charts.

use std::time::Duration;

use crate::config::Thresholds;
use crate::content::TIME_RANGES;
use crate::sim::{
    Classifier, MetricSample, MetricSpec, SampleReport, Section, Series, Simulator, Status, Wave,
    Waveform,
};

use super::{cycle, Report};

/// Chart filter choices. Cosmetic: every chart keeps updating.
pub const METRIC_FILTERS: &[&str] = &["all", "temperature", "pressure", "voltage", "flow"];

const CURRENT: [MetricSpec; 6] = [
    MetricSpec::new("temperature", "Temperature", "°C", 68.5, 2.0),
    MetricSpec::new("pressure", "Pressure", "hPa", 1015.2, 3.0),
    MetricSpec::new("voltage", "Voltage", "V", 221.8, 2.0),
    MetricSpec::new("flow", "Flow Rate", "L/min", 47.3, 3.0),
    MetricSpec::new("humidity", "Humidity", "%", 45.2, 1.0),
    MetricSpec::new("wind_speed", "Wind Speed", "m/s", 12.8, 2.0),
];

/// (key, waveform, phase step of the pre-filled history)
const CHARTS: [(&str, Waveform, f64); 4] = [
    (
        "temperature",
        Waveform { base: 65.0, wave: Wave::Sin, frequency: 0.001, amplitude: 5.0, noise: 2.0 },
        0.3,
    ),
    (
        "pressure",
        Waveform { base: 1013.0, wave: Wave::Cos, frequency: 0.0008, amplitude: 10.0, noise: 5.0 },
        0.2,
    ),
    (
        "voltage",
        Waveform { base: 220.0, wave: Wave::Sin, frequency: 0.0012, amplitude: 8.0, noise: 3.0 },
        0.4,
    ),
    (
        "flow",
        Waveform { base: 45.0, wave: Wave::Cos, frequency: 0.0015, amplitude: 6.0, noise: 4.0 },
        0.5,
    ),
];

#[derive(Debug, Clone)]
pub struct TelemetryPanel {
    current: Vec<(MetricSample, Classifier<Status>)>,
    charts: Vec<(&'static str, Series)>,
    time_range: usize,
    metric_filter: usize,
}

impl TelemetryPanel {
    /// Mount at baselines and pre-fill chart history ending at the current time.
    pub fn new(thresholds: &Thresholds, sim: &mut Simulator) -> Self {
        let current = CURRENT
            .into_iter()
            .map(|spec| {
                let rule = match spec.key {
                    "temperature" => thresholds.telemetry_temperature(),
                    "voltage" => thresholds.telemetry_voltage(),
                    _ => thresholds.telemetry_default(),
                };
                let mut sample = MetricSample::mount(spec);
                sample.classify(&rule);
                (sample, rule)
            })
            .collect();
        let charts = CHARTS
            .into_iter()
            .map(|(key, waveform, seed_step)| (key, Series::seed(waveform, seed_step, sim)))
            .collect();
        Self {
            current,
            charts,
            time_range: 0,
            metric_filter: 0,
        }
    }

    pub fn current(&self) -> impl Iterator<Item = &MetricSample> {
        self.current.iter().map(|(s, _)| s)
    }

    pub fn get(&self, key: &str) -> Option<&MetricSample> {
        self.current().find(|s| s.key() == key)
    }

    /// Charts selected by the metric filter.
    pub fn charts(&self) -> impl Iterator<Item = &(&'static str, Series)> {
        let filter = self.metric_filter();
        self.charts.iter().filter(move |(key, _)| filter == "all" || *key == filter)
    }

    pub fn time_range(&self) -> &'static str {
        TIME_RANGES[self.time_range].1
    }

    pub fn metric_filter(&self) -> &'static str {
        METRIC_FILTERS[self.metric_filter]
    }

    pub fn cycle_time_range(&mut self) {
        self.time_range = cycle(self.time_range, TIME_RANGES.len(), true);
    }

    pub fn cycle_metric_filter(&mut self) {
        self.metric_filter = cycle(self.metric_filter, METRIC_FILTERS.len(), true);
    }
}

impl Section for TelemetryPanel {
    fn name(&self) -> &'static str {
        "telemetry"
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(2000)
    }

    fn on_tick(&mut self, sim: &mut Simulator) {
        for (_, series) in self.charts.iter_mut() {
            series.push_now(sim);
        }
        for (sample, rule) in self.current.iter_mut() {
            sample.step(sim);
            sample.classify(rule);
        }
    }
}

impl Report for TelemetryPanel {
    fn samples(&self) -> Vec<SampleReport> {
        self.current().map(MetricSample::report).collect()
    }
}
