//! Core simulation types: scenarios, traffic lights, hourly records, and run echoes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::stats::SimulationStats;

/// Number of hourly records in one simulated day.
pub const HOURS_PER_DAY: usize = 24;

/// Three-level grid stress classification for one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrafficLight {
    /// Comfortable headroom on both flow and reservoir.
    Green,
    /// Elevated flow or a reservoir below 40%.
    Yellow,
    /// Flow at or above 85% of the safe limit, or a reservoir below 25%.
    Red,
}

impl TrafficLight {
    /// All variants, mildest first.
    pub const ALL: [TrafficLight; 3] = [TrafficLight::Green, TrafficLight::Yellow, TrafficLight::Red];

    /// Wire name (`Green`, `Yellow`, `Red`).
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficLight::Green => "Green",
            TrafficLight::Yellow => "Yellow",
            TrafficLight::Red => "Red",
        }
    }
}

impl fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrafficLight {
    type Err = String;

    /// Parses a traffic light name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "green" => Ok(TrafficLight::Green),
            "yellow" => Ok(TrafficLight::Yellow),
            "red" => Ok(TrafficLight::Red),
            _ => Err(format!(
                "unknown grid status \"{s}\", expected one of: Green, Yellow, Red"
            )),
        }
    }
}

/// Day scenario selecting which demand modifiers apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Unmodified baseline profile.
    #[default]
    NormalDay,
    /// Evening heat: hours 18-21 scaled by 1.6.
    HotDay,
    /// Match-day halftime spike: hour 20 scaled by 2.2.
    FootballDay,
    /// Both the heat and the halftime modifiers.
    CombinedDay,
}

impl Scenario {
    /// All scenarios in presentation order.
    pub const ALL: [Scenario; 4] = [
        Scenario::NormalDay,
        Scenario::HotDay,
        Scenario::FootballDay,
        Scenario::CombinedDay,
    ];

    /// Stable identifier (`normal_day`, `hot_day`, ...).
    pub fn id(self) -> &'static str {
        match self {
            Scenario::NormalDay => "normal_day",
            Scenario::HotDay => "hot_day",
            Scenario::FootballDay => "football_day",
            Scenario::CombinedDay => "combined_day",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::NormalDay => "Normal Day",
            Scenario::HotDay => "Hot Summer Day",
            Scenario::FootballDay => "Football Match Day",
            Scenario::CombinedDay => "Combined Stress",
        }
    }

    /// One-line description of the modifiers this scenario applies.
    pub fn description(self) -> &'static str {
        match self {
            Scenario::NormalDay => "Typical district consumption pattern",
            Scenario::HotDay => "1.6x usage during evening hours (18:00-22:00)",
            Scenario::FootballDay => "2.2x spike at 20:00 (halftime)",
            Scenario::CombinedDay => "Hot day and football match combined",
        }
    }

    /// Whether the evening heat modifier applies.
    pub fn has_heat(self) -> bool {
        matches!(self, Scenario::HotDay | Scenario::CombinedDay)
    }

    /// Whether the halftime spike modifier applies.
    pub fn has_match(self) -> bool {
        matches!(self, Scenario::FootballDay | Scenario::CombinedDay)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.id() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Scenario::ALL.iter().map(|sc| sc.id()).collect();
                format!("unknown scenario \"{s}\", available: {}", known.join(", "))
            })
    }
}

/// Demand-response parameters of one simulation run, echoed in the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Day scenario.
    pub scenario: Scenario,
    /// Fraction of households taking part in the program (0.0 to 1.0).
    pub participation_rate: f64,
    /// Fraction of a participant's peak-hour usage moved later (0.0 to 1.0).
    pub shift_fraction: f64,
}

impl SimulationConfig {
    /// Creates a run configuration without validating the rates.
    pub fn new(scenario: Scenario, participation_rate: f64, shift_fraction: f64) -> Self {
        Self {
            scenario,
            participation_rate,
            shift_fraction,
        }
    }

    /// Returns a copy with both rates forced into `[0, 1]`.
    ///
    /// Out-of-range values are logged at `warn` level. `NaN` becomes `0.0`.
    pub fn clamped(self) -> Self {
        Self {
            scenario: self.scenario,
            participation_rate: clamp_unit("participation_rate", self.participation_rate),
            shift_fraction: clamp_unit("shift_fraction", self.shift_fraction),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(Scenario::NormalDay, 0.15, 0.25)
    }
}

fn clamp_unit(field: &str, value: f64) -> f64 {
    if value.is_nan() {
        tracing::warn!(field, "rate is NaN, using 0.0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&value) {
        let clamped = value.clamp(0.0, 1.0);
        tracing::warn!(field, value, clamped, "rate outside [0, 1], clamping");
        return clamped;
    }
    value
}

/// Demand, reservoir, and classification for one hour of the simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Hour of day (0-23).
    pub hour: usize,
    /// Baseline district demand (m³/h).
    pub demand: f64,
    /// Demand after voluntary load shifting (m³/h).
    pub demand_flex: f64,
    /// Baseline reservoir level at the end of the hour (m³).
    pub tank_level: f64,
    /// Reservoir level under the shifted demand (m³).
    pub tank_level_flex: f64,
    /// `demand / max_safe_flow`.
    pub stress_index: f64,
    /// `demand_flex / max_safe_flow`.
    pub stress_index_flex: f64,
    /// Baseline classification.
    pub color: TrafficLight,
    /// Classification under shifted demand.
    pub color_flex: TrafficLight,
}

impl fmt::Display for HourlyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "h={:>2} | demand={:>7.2} m³/h  flex={:>7.2} m³/h | \
             tank={:>7.1} m³  flex={:>7.1} m³ | stress={:.2}/{:.2} | {:<6} -> {}",
            self.hour,
            self.demand,
            self.demand_flex,
            self.tank_level,
            self.tank_level_flex,
            self.stress_index,
            self.stress_index_flex,
            self.color,
            self.color_flex,
        )
    }
}

/// Full-day output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Exactly 24 records ordered by hour.
    #[serde(rename = "hourly_data")]
    pub hourly: Vec<HourlyRecord>,
    /// Aggregates over `hourly`.
    pub stats: SimulationStats,
    /// Parameters actually used (after clamping).
    pub config: SimulationConfig,
}
