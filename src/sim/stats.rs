//! Post-hoc aggregates over a simulated day.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{HourlyRecord, TrafficLight};

/// Day-level statistics for the baseline and shifted series.
///
/// Computed from the finished `HourlyRecord`s so the reported numbers can
/// never disagree with the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Peak baseline demand (m³/h).
    pub max_demand: f64,
    /// Peak shifted demand (m³/h).
    pub max_demand_flex: f64,
    /// Hours classified RED under baseline demand.
    pub red_hours: usize,
    /// Hours classified RED under shifted demand.
    pub red_hours_flex: usize,
    /// Lowest baseline reservoir level (m³).
    pub min_tank: f64,
    /// Lowest reservoir level under shifted demand (m³).
    pub min_tank_flex: f64,
}

impl SimulationStats {
    /// Aggregates a day of records.
    ///
    /// An empty slice yields zero counts, `-inf` maxima and `+inf` minima.
    pub fn from_records(records: &[HourlyRecord]) -> Self {
        let mut stats = Self {
            max_demand: f64::NEG_INFINITY,
            max_demand_flex: f64::NEG_INFINITY,
            red_hours: 0,
            red_hours_flex: 0,
            min_tank: f64::INFINITY,
            min_tank_flex: f64::INFINITY,
        };

        for r in records {
            stats.max_demand = stats.max_demand.max(r.demand);
            stats.max_demand_flex = stats.max_demand_flex.max(r.demand_flex);
            stats.min_tank = stats.min_tank.min(r.tank_level);
            stats.min_tank_flex = stats.min_tank_flex.min(r.tank_level_flex);
            if r.color == TrafficLight::Red {
                stats.red_hours += 1;
            }
            if r.color_flex == TrafficLight::Red {
                stats.red_hours_flex += 1;
            }
        }

        stats
    }

    /// RED hours avoided by shifting (negative if shifting created new ones).
    pub fn red_hours_avoided(&self) -> i64 {
        self.red_hours as i64 - self.red_hours_flex as i64
    }

    /// Peak reduction achieved by shifting (m³/h).
    pub fn peak_reduction(&self) -> f64 {
        self.max_demand - self.max_demand_flex
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Day Report ---")?;
        writeln!(
            f,
            "Peak demand:        {:.2} m³/h (flex {:.2} m³/h)",
            self.max_demand, self.max_demand_flex
        )?;
        writeln!(f, "Red hours:          {}", self.red_hours)?;
        writeln!(f, "Red hours (flex):   {}", self.red_hours_flex)?;
        write!(
            f,
            "Min tank level:     {:.1} m³ (flex {:.1} m³)",
            self.min_tank, self.min_tank_flex
        )
    }
}
