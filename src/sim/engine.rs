//! Simulation engine that combines demand, shifting, reservoir, and classification.

use super::demand::{ShiftStrategy, shift_demand};
use super::district::DistrictParams;
use super::stats::SimulationStats;
use super::stress::classify;
use super::tank::reservoir_levels;
use super::types::{HOURS_PER_DAY, HourlyRecord, Scenario, SimulationConfig, SimulationResult};

/// Simulation engine owning the district parameters and shift strategy.
///
/// The engine holds no per-run state: `run` is a pure function of the engine
/// and its argument, so one engine can serve any number of runs.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    district: DistrictParams,
    strategy: ShiftStrategy,
}

impl Engine {
    /// Creates an engine for the given district and shift strategy.
    pub fn new(district: DistrictParams, strategy: ShiftStrategy) -> Self {
        Self { district, strategy }
    }

    /// Runs one simulated day.
    ///
    /// Rates outside `[0, 1]` are clamped (with a warning) before use; the
    /// returned `config` echoes the clamped values.
    pub fn run(&self, config: SimulationConfig) -> SimulationResult {
        let config = config.clamped();
        let district = &self.district;

        let demand = district.scenario_demand(config.scenario);
        let flex = shift_demand(
            district,
            &demand,
            config.participation_rate,
            config.shift_fraction,
            self.strategy,
        );

        let tank = reservoir_levels(district, &demand);
        let tank_flex = reservoir_levels(district, &flex.demand);

        let hourly: Vec<HourlyRecord> = (0..HOURS_PER_DAY)
            .map(|h| {
                let stress_index = district.stress_index(demand[h]);
                let stress_index_flex = district.stress_index(flex.demand[h]);
                HourlyRecord {
                    hour: h,
                    demand: demand[h],
                    demand_flex: flex.demand[h],
                    tank_level: tank[h],
                    tank_level_flex: tank_flex[h],
                    stress_index,
                    stress_index_flex,
                    color: classify(stress_index, district.tank_fraction(tank[h])),
                    color_flex: classify(stress_index_flex, district.tank_fraction(tank_flex[h])),
                }
            })
            .collect();

        let stats = SimulationStats::from_records(&hourly);
        tracing::debug!(
            scenario = %config.scenario,
            red_hours = stats.red_hours,
            red_hours_flex = stats.red_hours_flex,
            dropped_m3 = flex.dropped,
            "simulated day"
        );

        SimulationResult {
            hourly,
            stats,
            config,
        }
    }

    /// District parameters used by this engine.
    pub fn district(&self) -> &DistrictParams {
        &self.district
    }

    /// Shift strategy used by this engine.
    pub fn strategy(&self) -> ShiftStrategy {
        self.strategy
    }
}

/// Simulates one day of the reference district with single-pass shifting.
pub fn simulate(scenario: Scenario, participation_rate: f64, shift_fraction: f64) -> SimulationResult {
    Engine::default().run(SimulationConfig::new(scenario, participation_rate, shift_fraction))
}

/// Simulates one day for an arbitrary district and strategy.
pub fn simulate_with(
    district: &DistrictParams,
    config: SimulationConfig,
    strategy: ShiftStrategy,
) -> SimulationResult {
    Engine::new(district.clone(), strategy).run(config)
}
