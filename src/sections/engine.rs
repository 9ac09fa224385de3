use std::time::Duration;

use crate::config::Thresholds;
use crate::content::{PredictionSeed, ENGINE_PREDICTIONS};
use crate::sim::{Classifier, MetricSample, MetricSpec, SampleReport, Section, Simulator, Tone};

use super::Report;

/// A failure prediction whose confidence drifts inside a clamp.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub seed: &'static PredictionSeed,
    pub confidence: MetricSample,
}

impl Prediction {
    pub(crate) fn mount(seed: &'static PredictionSeed, magnitude: f64) -> Self {
        let spec = MetricSpec::new(seed.equipment, seed.prediction, "%", seed.confidence, magnitude)
            .clamped(70.0, 95.0)
            .precision(0);
        Self {
            seed,
            confidence: MetricSample::mount(spec),
        }
    }
}

/// Which list the engine section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineTab {
    #[default]
    Predictions,
    Maintenance,
}

impl EngineTab {
    pub fn label(&self) -> &'static str {
        match self {
            EngineTab::Predictions => "Failure Predictions",
            EngineTab::Maintenance => "Maintenance Queue",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            EngineTab::Predictions => EngineTab::Maintenance,
            EngineTab::Maintenance => EngineTab::Predictions,
        }
    }
}

/// Landing page predictive maintenance showcase.
#[derive(Debug, Clone)]
pub struct PredictiveEngine {
    predictions: Vec<Prediction>,
    tab: EngineTab,
    bands: Classifier<Tone>,
}

impl PredictiveEngine {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            predictions: ENGINE_PREDICTIONS.iter().map(|p| Prediction::mount(p, 5.0)).collect(),
            tab: EngineTab::default(),
            bands: thresholds.confidence_bands(),
        }
    }

    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    pub fn tab(&self) -> EngineTab {
        self.tab
    }

    pub fn toggle_tab(&mut self) {
        self.tab = self.tab.toggle();
    }

    /// Color band for a confidence value.
    pub fn band(&self, confidence: f64) -> Tone {
        self.bands.classify(confidence)
    }
}

impl Section for PredictiveEngine {
    fn name(&self) -> &'static str {
        "predictive_engine"
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(3000)
    }

    fn on_tick(&mut self, sim: &mut Simulator) {
        for p in self.predictions.iter_mut() {
            p.confidence.step(sim);
        }
    }
}

impl Report for PredictiveEngine {
    fn samples(&self) -> Vec<SampleReport> {
        self.predictions.iter().map(|p| p.confidence.report()).collect()
    }
}
