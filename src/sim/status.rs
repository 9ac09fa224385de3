//! Ordered threshold classification.
//!
//! A [`Classifier`] holds rules evaluated top to bottom; the first rule whose
//! comparison holds decides the label, otherwise the fallback applies. The
//! comparison operator is part of the rule, so `> 200` and `>= 200` classify
//! the boundary differently.

use serde::{Deserialize, Serialize};

/// Status label shown next to a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Normal,
    Low,
    High,
    Warning,
    Excellent,
    Good,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Normal => "Normal",
            Status::Low => "Low",
            Status::High => "High",
            Status::Warning => "Warning",
            Status::Excellent => "Excellent",
            Status::Good => "Good",
        }
    }

    /// Color band used when rendering this status.
    pub fn tone(&self) -> Tone {
        match self {
            Status::Normal | Status::Excellent | Status::Good => Tone::Healthy,
            Status::Low | Status::High | Status::Warning => Tone::Warning,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Color band for gauges and badges, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tone {
    Healthy,
    Warning,
    Degraded,
    Critical,
}

/// Comparison between a value and a rule's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// `value > threshold`
    Gt,
    /// `value < threshold`
    Lt,
    /// `value >= threshold`
    Ge,
    /// `value <= threshold`
    Le,
}

impl Comparison {
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::Gt => value > threshold,
            Comparison::Lt => value < threshold,
            Comparison::Ge => value >= threshold,
            Comparison::Le => value <= threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule<L> {
    pub comparison: Comparison,
    pub threshold: f64,
    pub label: L,
}

/// First-match-wins threshold rules with a fallback label.
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier<L> {
    rules: Vec<Rule<L>>,
    fallback: L,
}

impl<L: Copy> Classifier<L> {
    /// A classifier with no rules yet; everything maps to `fallback`.
    pub fn otherwise(fallback: L) -> Self {
        Self { rules: Vec::new(), fallback }
    }

    /// Append a rule. Rules added earlier take precedence.
    pub fn when(mut self, comparison: Comparison, threshold: f64, label: L) -> Self {
        self.rules.push(Rule { comparison, threshold, label });
        self
    }

    pub fn classify(&self, value: f64) -> L {
        self.rules
            .iter()
            .find(|r| r.comparison.holds(value, r.threshold))
            .map(|r| r.label)
            .unwrap_or(self.fallback)
    }

    pub fn rules(&self) -> &[Rule<L>] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voltage() -> Classifier<Status> {
        Classifier::otherwise(Status::Low).when(Comparison::Gt, 200.0, Status::Normal)
    }

    #[test]
    fn test_voltage_boundary_is_low() {
        assert_eq!(voltage().classify(200.0), Status::Low);
        assert_eq!(voltage().classify(200.01), Status::Normal);
    }

    #[test]
    fn test_temperature_strict_less_than() {
        let c = Classifier::otherwise(Status::High).when(Comparison::Lt, 75.0, Status::Normal);
        assert_eq!(c.classify(74.99), Status::Normal);
        assert_eq!(c.classify(75.0), Status::High);
    }

    #[test]
    fn test_first_match_wins() {
        let bands = Classifier::otherwise(Tone::Critical)
            .when(Comparison::Ge, 95.0, Tone::Healthy)
            .when(Comparison::Ge, 85.0, Tone::Warning)
            .when(Comparison::Ge, 70.0, Tone::Degraded);
        assert_eq!(bands.classify(95.0), Tone::Healthy);
        assert_eq!(bands.classify(94.9), Tone::Warning);
        assert_eq!(bands.classify(85.0), Tone::Warning);
        assert_eq!(bands.classify(70.0), Tone::Degraded);
        assert_eq!(bands.classify(0.0), Tone::Critical);
    }

    #[test]
    fn test_nan_falls_through() {
        assert_eq!(voltage().classify(f64::NAN), Status::Low);
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(Status::Excellent.tone(), Tone::Healthy);
        assert_eq!(Status::High.tone(), Tone::Warning);
        assert!(Tone::Critical > Tone::Healthy);
    }
}
