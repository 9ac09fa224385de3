//! Device health grid with region and category filters.

use std::time::Duration;

use crate::config::Thresholds;
use crate::content::{DeviceSeed, DeviceState, CATEGORIES, DEVICES, REGIONS};
use crate::sim::{Classifier, MetricSample, MetricSpec, SampleReport, Section, Simulator, Tone};

use super::{cycle, Report};

#[derive(Debug, Clone)]
pub struct Device {
    pub seed: &'static DeviceSeed,
    pub health: MetricSample,
}

impl Device {
    fn mount(seed: &'static DeviceSeed) -> Self {
        let spec = MetricSpec::new(seed.name, seed.name, "%", seed.health, 5.0).precision(0);
        // Offline devices report 0 and never drift, so they stay unclamped.
        let spec = match seed.state {
            DeviceState::Offline => spec,
            _ => spec.clamped(75.0, 100.0),
        };
        Self {
            seed,
            health: MetricSample::mount(spec),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.seed.state == DeviceState::Offline
    }

    /// `region` is a location substring; `all` matches everything.
    pub fn in_region(&self, region: &str) -> bool {
        region == "all" || self.seed.location.contains(region)
    }

    /// `category` is a case-insensitive name substring; `all` matches everything.
    pub fn in_category(&self, category: &str) -> bool {
        category == "all" || self.seed.name.to_lowercase().contains(&category.to_lowercase())
    }
}

/// Fleet-wide counts over every device, ignoring the filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceSummary {
    pub online: usize,
    pub warning: usize,
    pub offline: usize,
    /// Mean health rounded to a whole percent.
    pub average_health: i64,
}

#[derive(Debug, Clone)]
pub struct DeviceControl {
    devices: Vec<Device>,
    region: usize,
    category: usize,
    bands: Classifier<Tone>,
}

impl DeviceControl {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            devices: DEVICES.iter().map(Device::mount).collect(),
            region: 0,
            category: 0,
            bands: thresholds.health_bands(),
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Devices matching both filters, in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = &Device> {
        let (region, category) = (self.region(), self.category());
        self.devices
            .iter()
            .filter(move |d| d.in_region(region) && d.in_category(category))
    }

    pub fn region(&self) -> &'static str {
        REGIONS[self.region]
    }

    pub fn category(&self) -> &'static str {
        CATEGORIES[self.category]
    }

    pub fn cycle_region(&mut self) {
        self.region = cycle(self.region, REGIONS.len(), true);
    }

    pub fn cycle_category(&mut self) {
        self.category = cycle(self.category, CATEGORIES.len(), true);
    }

    pub fn band(&self, health: f64) -> Tone {
        self.bands.classify(health)
    }

    pub fn summary(&self) -> DeviceSummary {
        let mut summary = DeviceSummary::default();
        for d in &self.devices {
            match d.seed.state {
                DeviceState::Online => summary.online += 1,
                DeviceState::Warning => summary.warning += 1,
                DeviceState::Offline => summary.offline += 1,
            }
        }
        if !self.devices.is_empty() {
            let total: f64 = self.devices.iter().map(|d| d.health.value).sum();
            summary.average_health = (total / self.devices.len() as f64).round() as i64;
        }
        summary
    }
}

impl Section for DeviceControl {
    fn name(&self) -> &'static str {
        "device_control"
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(3000)
    }

    fn on_tick(&mut self, sim: &mut Simulator) {
        for d in self.devices.iter_mut().filter(|d| !d.is_offline()) {
            d.health.step(sim);
        }
    }
}

impl Report for DeviceControl {
    fn samples(&self) -> Vec<SampleReport> {
        self.devices.iter().map(|d| d.health.report()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FixedEntropy, ManualClock, SeededEntropy};

    fn names(c: &DeviceControl) -> Vec<&'static str> {
        c.filtered().map(|d| d.seed.name).collect()
    }

    #[test]
    fn test_offline_device_stays_at_zero() {
        let mut sim = Simulator::new(Box::new(ManualClock::new()), Box::new(SeededEntropy::new(5)));
        let mut control = DeviceControl::new(&Thresholds::default());
        for _ in 0..200 {
            control.on_tick(&mut sim);
        }
        for d in control.devices() {
            if d.is_offline() {
                assert_eq!(d.health.value, 0.0);
            } else {
                assert!((75.0..=100.0).contains(&d.health.value), "{}", d.seed.name);
            }
        }
    }

    #[test]
    fn test_region_filter() {
        let mut control = DeviceControl::new(&Thresholds::default());
        assert_eq!(names(&control).len(), 6);
        control.cycle_region();
        assert_eq!(control.region(), "Building A");
        assert_eq!(names(&control), ["Temperature Sensor #A-101", "Flow Meter #A-150"]);
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let mut control = DeviceControl::new(&Thresholds::default());
        control.cycle_category();
        assert_eq!(control.category(), "Temperature");
        assert_eq!(names(&control), ["Temperature Sensor #A-101"]);

        // Building B has no temperature device
        control.cycle_region();
        control.cycle_region();
        assert!(names(&control).is_empty());
    }

    #[test]
    fn test_filters_wrap_to_all() {
        let mut control = DeviceControl::new(&Thresholds::default());
        for _ in 0..REGIONS.len() {
            control.cycle_region();
        }
        assert_eq!(control.region(), "all");
    }

    #[test]
    fn test_summary_counts_every_device() {
        let mut control = DeviceControl::new(&Thresholds::default());
        // Filters do not narrow the summary
        control.cycle_region();
        let summary = control.summary();
        assert_eq!(
            summary,
            DeviceSummary { online: 4, warning: 1, offline: 1, average_health: 79 }
        );
    }

    #[test]
    fn test_summary_follows_health_drift() {
        let mut sim = Simulator::new(Box::new(ManualClock::new()), Box::new(FixedEntropy::new(1.0)));
        let mut control = DeviceControl::new(&Thresholds::default());
        control.on_tick(&mut sim);
        // live devices gain 2.5 up to the 100 cap: 481.5 / 6 = 80.25
        assert_eq!(control.summary().average_health, 80);
    }

    #[test]
    fn test_health_bands() {
        let control = DeviceControl::new(&Thresholds::default());
        assert_eq!(control.band(98.0), Tone::Healthy);
        assert_eq!(control.band(87.0), Tone::Warning);
        assert_eq!(control.band(72.0), Tone::Degraded);
        assert_eq!(control.band(0.0), Tone::Critical);
    }
}
