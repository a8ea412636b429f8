//! TOML-based run configuration and preset definitions.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::sim::{DistrictParams, Scenario, ShiftStrategy, SimulationConfig};

/// Top-level run configuration parsed from TOML.
///
/// Every section is optional and falls back to the reference district on a
/// normal day. Load from TOML with [`ScenarioConfig::from_toml_file`] or
/// pick a built-in day with [`ScenarioConfig::from_preset`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Physical district parameters.
    #[serde(default)]
    pub district: DistrictParams,
    /// Scenario and demand-response rates.
    #[serde(default)]
    pub simulation: SimulationSettings,
    /// Action recommendation context.
    #[serde(default)]
    pub selector: SelectorSettings,
}

/// Scenario and demand-response parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSettings {
    pub scenario: Scenario,
    /// Fraction of households that shift demand (0.0-1.0).
    pub participation_rate: f64,
    /// Fraction of a participant's stressed-hour demand moved (0.0-1.0).
    pub shift_fraction: f64,
    pub strategy: ShiftStrategy,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        let defaults = SimulationConfig::default();
        Self {
            scenario: defaults.scenario,
            participation_rate: defaults.participation_rate,
            shift_fraction: defaults.shift_fraction,
            strategy: ShiftStrategy::default(),
        }
    }
}

impl SimulationSettings {
    /// The engine input described by these settings.
    pub fn to_config(&self) -> SimulationConfig {
        SimulationConfig::new(self.scenario, self.participation_rate, self.shift_fraction)
    }
}

/// Context for the action recommendations printed after a run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorSettings {
    /// Hour of day the resident is looking at the app (0-23).
    pub hour: u32,
    /// Calendar date, written as a quoted `"YYYY-MM-DD"` string. Today if unset.
    pub date: Option<NaiveDate>,
    /// Maximum number of actions to recommend.
    pub count: usize,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            hour: 19,
            date: None,
            count: 3,
        }
    }
}

impl SelectorSettings {
    /// Configured date, or the local calendar date when unset.
    pub fn date_or_today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"simulation.participation_rate"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ScenarioConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["normal_day", "hot_day", "football_day", "combined_day"];

    /// The reference district on the given scenario with default rates.
    pub fn for_scenario(scenario: Scenario) -> Self {
        Self {
            simulation: SimulationSettings {
                scenario,
                ..SimulationSettings::default()
            },
            ..Self::default()
        }
    }

    /// Loads a configuration from a named preset.
    ///
    /// The match-day presets look at halftime (20:00) instead of the default
    /// evening hour.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        let scenario: Scenario = name.parse().map_err(|_| {
            ConfigError::new(
                "preset",
                format!("unknown preset \"{name}\", available: {}", Self::PRESETS.join(", ")),
            )
        })?;
        let mut cfg = Self::for_scenario(scenario);
        if scenario.has_match() {
            cfg.selector.hour = 20;
        }
        Ok(cfg)
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid. Rates outside
    /// `[0, 1]` are rejected here even though the engine would clamp them.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let d = &self.district;
        if d.households == 0 {
            errors.push(ConfigError::new("district.households", "must be > 0"));
        }
        if !positive(d.max_safe_flow_m3h) {
            errors.push(ConfigError::new("district.max_safe_flow_m3h", "must be > 0"));
        }
        if !positive(d.tank_capacity_m3) {
            errors.push(ConfigError::new("district.tank_capacity_m3", "must be > 0"));
        }
        if !(0.0..=d.tank_capacity_m3).contains(&d.initial_tank_m3) {
            errors.push(ConfigError::new(
                "district.initial_tank_m3",
                "must be in [0, district.tank_capacity_m3]",
            ));
        }
        if !non_negative(d.inflow_m3h) {
            errors.push(ConfigError::new("district.inflow_m3h", "must be >= 0"));
        }
        if let Some(h) = d.profile_liters.iter().position(|l| !non_negative(*l)) {
            errors.push(ConfigError::new(
                format!("district.profile_liters[{h}]"),
                "must be >= 0",
            ));
        }

        let s = &self.simulation;
        if !(0.0..=1.0).contains(&s.participation_rate) {
            errors.push(ConfigError::new(
                "simulation.participation_rate",
                "must be in [0.0, 1.0]",
            ));
        }
        if !(0.0..=1.0).contains(&s.shift_fraction) {
            errors.push(ConfigError::new("simulation.shift_fraction", "must be in [0.0, 1.0]"));
        }
        if let ShiftStrategy::Iterative { max_passes: 0 } = s.strategy {
            errors.push(ConfigError::new("simulation.strategy.max_passes", "must be > 0"));
        }

        let sel = &self.selector;
        if sel.hour > 23 {
            errors.push(ConfigError::new("selector.hour", "must be in 0-23"));
        }

        errors
    }
}

/// False for NaN.
fn positive(v: f64) -> bool {
    v > 0.0
}

/// False for NaN.
fn non_negative(v: f64) -> bool {
    v >= 0.0
}
