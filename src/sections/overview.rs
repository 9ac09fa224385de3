use std::time::Duration;

use serde::Serialize;

use crate::content::{Alert, RECENT_ALERTS};
use crate::sim::{MetricSample, MetricSpec, SampleReport, Section, Simulator};

use super::Report;

const REALTIME: [MetricSpec; 4] = [
    MetricSpec::new("temperature", "Temperature", "°C", 68.5, 2.0),
    MetricSpec::new("pressure", "Pressure", "hPa", 1013.2, 5.0),
    MetricSpec::new("voltage", "Voltage", "V", 220.4, 3.0),
    MetricSpec::new("flow", "Flow Rate", "L/min", 45.8, 4.0),
];

/// Headline counters on the overview panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Counters {
    pub devices_online: i64,
    pub devices_total: i64,
    pub active_alerts: i64,
    pub uptime: f64,
    pub data_points: i64,
    pub energy_saved: f64,
}

impl Default for Counters {
    fn default() -> Self {
        Self {
            devices_online: 1247,
            devices_total: 1285,
            active_alerts: 3,
            uptime: 99.7,
            data_points: 2_847_291,
            energy_saved: 34.2,
        }
    }
}

/// Dashboard landing panel.
#[derive(Debug, Clone)]
pub struct OverviewPanel {
    counters: Counters,
    realtime: Vec<MetricSample>,
}

impl OverviewPanel {
    pub fn new() -> Self {
        Self {
            counters: Counters::default(),
            realtime: REALTIME.into_iter().map(MetricSample::mount).collect(),
        }
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn realtime(&self) -> &[MetricSample] {
        &self.realtime
    }

    pub fn alerts(&self) -> &'static [Alert] {
        RECENT_ALERTS
    }
}

impl Default for OverviewPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for OverviewPanel {
    fn name(&self) -> &'static str {
        "overview"
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(3000)
    }

    fn on_tick(&mut self, sim: &mut Simulator) {
        self.counters.devices_online += sim.count_step(-1.0, 3.0);
        self.counters.data_points += sim.count_step(50.0, 100.0);
        for sample in self.realtime.iter_mut() {
            sample.step(sim);
        }
    }
}

impl Report for OverviewPanel {
    fn samples(&self) -> Vec<SampleReport> {
        self.realtime.iter().map(MetricSample::report).collect()
    }
}
