//! Physical parameters of the simulated district.

use serde::{Deserialize, Serialize};

use super::types::{HOURS_PER_DAY, Scenario};

/// Per-household demand profile in liters/hour, 00:00 through 23:00.
pub const DEFAULT_PROFILE_LITERS: [f64; HOURS_PER_DAY] = [
    10.0, 8.0, 6.0, 5.0, 6.0, 15.0, 45.0, 70.0, 65.0, 50.0, 45.0, 45.0, 50.0, 45.0, 40.0, 45.0,
    55.0, 75.0, 90.0, 85.0, 70.0, 50.0, 30.0, 15.0,
];

/// Number of connected households.
pub const DEFAULT_HOUSEHOLDS: u32 = 4000;
/// Flow above which the network is considered stressed (m³/h).
pub const DEFAULT_MAX_SAFE_FLOW_M3H: f64 = 280.0;
/// Reservoir capacity (m³).
pub const DEFAULT_TANK_CAPACITY_M3: f64 = 3000.0;
/// Reservoir level at 00:00 (m³).
pub const DEFAULT_INITIAL_TANK_M3: f64 = 2500.0;
/// Constant supply into the reservoir (m³/h).
pub const DEFAULT_INFLOW_M3H: f64 = 200.0;

/// Evening hours scaled on hot days (inclusive range).
pub const HEAT_HOURS: std::ops::RangeInclusive<usize> = 18..=21;
/// Demand multiplier applied to [`HEAT_HOURS`].
pub const HEAT_MULTIPLIER: f64 = 1.6;
/// Hour of the halftime spike on match days.
pub const MATCH_HOUR: usize = 20;
/// Demand multiplier applied at [`MATCH_HOUR`].
pub const MATCH_MULTIPLIER: f64 = 2.2;

/// District constants the engine treats as fixed for a run.
///
/// The defaults describe the reference district; a TOML `[district]` section
/// may override any subset of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DistrictParams {
    /// Number of connected households.
    pub households: u32,
    /// Maximum safe district flow (m³/h).
    pub max_safe_flow_m3h: f64,
    /// Reservoir capacity (m³).
    pub tank_capacity_m3: f64,
    /// Reservoir level at the start of the day (m³).
    pub initial_tank_m3: f64,
    /// Constant reservoir inflow (m³/h).
    pub inflow_m3h: f64,
    /// Per-household demand profile (liters/hour), one value per hour.
    pub profile_liters: [f64; HOURS_PER_DAY],
}

impl Default for DistrictParams {
    fn default() -> Self {
        Self {
            households: DEFAULT_HOUSEHOLDS,
            max_safe_flow_m3h: DEFAULT_MAX_SAFE_FLOW_M3H,
            tank_capacity_m3: DEFAULT_TANK_CAPACITY_M3,
            initial_tank_m3: DEFAULT_INITIAL_TANK_M3,
            inflow_m3h: DEFAULT_INFLOW_M3H,
            profile_liters: DEFAULT_PROFILE_LITERS,
        }
    }
}

impl DistrictParams {
    /// District-wide demand (m³/h) for every hour before scenario modifiers.
    pub fn baseline_demand(&self) -> [f64; HOURS_PER_DAY] {
        let households = f64::from(self.households);
        self.profile_liters.map(|liters| liters * households / 1000.0)
    }

    /// Baseline demand with the scenario's multipliers applied.
    ///
    /// Modifiers are multiplicative, so the heat and halftime factors commute
    /// at hour 20 on a combined day.
    pub fn scenario_demand(&self, scenario: Scenario) -> [f64; HOURS_PER_DAY] {
        let mut demand = self.baseline_demand();
        if scenario.has_heat() {
            for h in HEAT_HOURS {
                demand[h] *= HEAT_MULTIPLIER;
            }
        }
        if scenario.has_match() {
            demand[MATCH_HOUR] *= MATCH_MULTIPLIER;
        }
        demand
    }

    /// Ratio of `demand` to the safe flow limit.
    pub fn stress_index(&self, demand_m3h: f64) -> f64 {
        demand_m3h / self.max_safe_flow_m3h
    }

    /// Reservoir level as a fraction of capacity.
    pub fn tank_fraction(&self, level_m3: f64) -> f64 {
        level_m3 / self.tank_capacity_m3
    }
}
