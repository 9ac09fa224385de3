//! Runtime settings.
//!
//! Thresholds used for status classification are demo constants, so they are
//! loaded as configuration rather than hard-coded into the sections. Values
//! come from an optional TOML file, then `RAGENTECH__*` environment
//! variables (e.g. `RAGENTECH__THRESHOLDS__MONITORING_VOLTAGE_LOW=210`).

use std::path::Path;

use ::config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::sim::{Classifier, Comparison, Status, Tone};

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file or environment could not be read or parsed.
    #[error("failed to load settings: {0}")]
    Load(#[from] ::config::ConfigError),

    /// A numeric setting was NaN or infinite.
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    /// A range had its lower bound above its upper bound.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvertedRange { min: f64, max: f64 },

    /// Band thresholds must decrease from best to worst.
    #[error("{0} thresholds must be strictly decreasing")]
    UnorderedBands(&'static str),
}

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Detect from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Thresholds for status labels and color bands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Landing monitoring: voltage above this is Normal, else Low.
    pub monitoring_voltage_low: f64,
    /// Landing monitoring: temperature below this is Normal, else High.
    pub monitoring_temperature_high: f64,
    /// Landing monitoring: uptime above this is Excellent, else Good.
    pub monitoring_uptime_excellent: f64,
    /// Dashboard telemetry: temperature above this is a Warning.
    pub telemetry_temperature_warning: f64,
    /// Dashboard telemetry: voltage below this is a Warning.
    pub telemetry_voltage_warning: f64,
    /// Device health bands, best to worst.
    pub health_good: f64,
    pub health_fair: f64,
    pub health_poor: f64,
    /// Prediction confidence bands, best to worst.
    pub confidence_high: f64,
    pub confidence_medium: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            monitoring_voltage_low: 200.0,
            monitoring_temperature_high: 75.0,
            monitoring_uptime_excellent: 99.0,
            telemetry_temperature_warning: 70.0,
            telemetry_voltage_warning: 215.0,
            health_good: 95.0,
            health_fair: 85.0,
            health_poor: 70.0,
            confidence_high: 90.0,
            confidence_medium: 80.0,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, v) in [
            ("monitoring_voltage_low", self.monitoring_voltage_low),
            ("monitoring_temperature_high", self.monitoring_temperature_high),
            ("monitoring_uptime_excellent", self.monitoring_uptime_excellent),
            ("telemetry_temperature_warning", self.telemetry_temperature_warning),
            ("telemetry_voltage_warning", self.telemetry_voltage_warning),
            ("health_good", self.health_good),
            ("health_fair", self.health_fair),
            ("health_poor", self.health_poor),
            ("confidence_high", self.confidence_high),
            ("confidence_medium", self.confidence_medium),
        ] {
            if !v.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if !(self.health_good > self.health_fair && self.health_fair > self.health_poor) {
            return Err(ConfigError::UnorderedBands("health"));
        }
        if self.confidence_high <= self.confidence_medium {
            return Err(ConfigError::UnorderedBands("confidence"));
        }
        Ok(())
    }

    /// `value > low → Normal`, else `Low`.
    pub fn monitoring_voltage(&self) -> Classifier<Status> {
        Classifier::otherwise(Status::Low).when(Comparison::Gt, self.monitoring_voltage_low, Status::Normal)
    }

    /// `value < high → Normal`, else `High`.
    pub fn monitoring_temperature(&self) -> Classifier<Status> {
        Classifier::otherwise(Status::High).when(
            Comparison::Lt,
            self.monitoring_temperature_high,
            Status::Normal,
        )
    }

    /// Pressure has no rule on the landing page.
    pub fn monitoring_pressure(&self) -> Classifier<Status> {
        Classifier::otherwise(Status::Normal)
    }

    /// `value > excellent → Excellent`, else `Good`.
    pub fn monitoring_uptime(&self) -> Classifier<Status> {
        Classifier::otherwise(Status::Good).when(
            Comparison::Gt,
            self.monitoring_uptime_excellent,
            Status::Excellent,
        )
    }

    /// `value > warning → Warning`, else `Normal`.
    pub fn telemetry_temperature(&self) -> Classifier<Status> {
        Classifier::otherwise(Status::Normal).when(
            Comparison::Gt,
            self.telemetry_temperature_warning,
            Status::Warning,
        )
    }

    /// `value < warning → Warning`, else `Normal`.
    pub fn telemetry_voltage(&self) -> Classifier<Status> {
        Classifier::otherwise(Status::Normal).when(
            Comparison::Lt,
            self.telemetry_voltage_warning,
            Status::Warning,
        )
    }

    /// Telemetry metrics without a rule.
    pub fn telemetry_default(&self) -> Classifier<Status> {
        Classifier::otherwise(Status::Normal)
    }

    pub fn health_bands(&self) -> Classifier<Tone> {
        Classifier::otherwise(Tone::Critical)
            .when(Comparison::Ge, self.health_good, Tone::Healthy)
            .when(Comparison::Ge, self.health_fair, Tone::Warning)
            .when(Comparison::Ge, self.health_poor, Tone::Degraded)
    }

    pub fn confidence_bands(&self) -> Classifier<Tone> {
        Classifier::otherwise(Tone::Critical)
            .when(Comparison::Ge, self.confidence_high, Tone::Healthy)
            .when(Comparison::Ge, self.confidence_medium, Tone::Warning)
    }
}

/// Everything the console reads at startup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub thresholds: Thresholds,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub theme: ThemeMode,
}

impl Settings {
    /// Load from an optional TOML file plus `RAGENTECH__*` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let settings: Settings = builder
            .add_source(
                Environment::with_prefix("RAGENTECH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        settings.thresholds.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::{Builder, NamedTempFile};

    // Environment variables are process-wide; tests that load settings take this.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn toml_file() -> NamedTempFile {
        Builder::new().suffix(".toml").tempfile().unwrap()
    }

    fn clear_env() {
        for key in [
            "RAGENTECH__THRESHOLDS__MONITORING_VOLTAGE_LOW",
            "RAGENTECH__SEED",
            "RAGENTECH__THEME",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_defaults_validate() {
        assert!(Thresholds::default().validate().is_ok());
        let s = Settings::default();
        assert_eq!(s.theme, ThemeMode::Auto);
        assert!(s.seed.is_none());
    }

    #[test]
    fn test_load_from_toml() {
        let _guard = env_lock();
        let mut file = toml_file();
        writeln!(
            file,
            r#"
seed = 42
theme = "dark"

[thresholds]
monitoring_voltage_low = 210.0
"#
        )
        .unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.thresholds.monitoring_voltage_low, 210.0);
        // Untouched fields keep their defaults
        assert_eq!(settings.thresholds.monitoring_temperature_high, 75.0);
    }

    #[test]
    fn test_rejects_unordered_bands() {
        let _guard = env_lock();
        let mut file = toml_file();
        writeln!(file, "[thresholds]\nhealth_fair = 99.0").unwrap();

        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::UnorderedBands("health")));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/ragentech.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = env_lock();
        std::env::set_var("RAGENTECH__THRESHOLDS__MONITORING_VOLTAGE_LOW", "210");
        std::env::set_var("RAGENTECH__SEED", "9");
        std::env::set_var("RAGENTECH__THEME", "light");

        let settings = Settings::load(None);
        clear_env();

        let settings = settings.unwrap();
        assert_eq!(settings.thresholds.monitoring_voltage_low, 210.0);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.theme, ThemeMode::Light);
        assert_eq!(settings.thresholds.monitoring_temperature_high, 75.0);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = env_lock();
        let mut file = toml_file();
        writeln!(file, "seed = 42\n\n[thresholds]\nmonitoring_voltage_low = 205.0").unwrap();
        std::env::set_var("RAGENTECH__THRESHOLDS__MONITORING_VOLTAGE_LOW", "212.5");

        let settings = Settings::load(Some(file.path()));
        clear_env();

        let settings = settings.unwrap();
        assert_eq!(settings.thresholds.monitoring_voltage_low, 212.5);
        // Keys absent from the environment still come from the file
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn test_configured_voltage_boundary() {
        let t = Thresholds { monitoring_voltage_low: 210.0, ..Thresholds::default() };
        assert_eq!(t.monitoring_voltage().classify(210.0), Status::Low);
        assert_eq!(t.monitoring_voltage().classify(210.5), Status::Normal);
    }

    #[test]
    fn test_band_rules_run_best_first() {
        let t = Thresholds::default();
        let cutoffs: Vec<f64> = t.health_bands().rules().iter().map(|r| r.threshold).collect();
        assert_eq!(cutoffs, [95.0, 85.0, 70.0]);
        assert_eq!(t.monitoring_uptime().rules()[0].comparison, Comparison::Gt);
        assert!(t.telemetry_default().rules().is_empty());
    }

    #[test]
    fn test_band_classifiers() {
        let t = Thresholds::default();
        assert_eq!(t.health_bands().classify(98.0), Tone::Healthy);
        assert_eq!(t.health_bands().classify(0.0), Tone::Critical);
        assert_eq!(t.confidence_bands().classify(87.0), Tone::Warning);
        assert_eq!(t.confidence_bands().classify(78.0), Tone::Critical);
    }
}
