//! Reservoir balance over the simulated day.

use super::district::DistrictParams;
use super::types::HOURS_PER_DAY;

/// Walks the day from 00:00 and returns the reservoir level after each hour.
///
/// `level[h] = clamp(level[h-1] + inflow - demand[h], 0, capacity)`, seeded
/// from the district's initial level. Each hour depends on the previous one,
/// so the fold is strictly left to right.
///
/// The cap is applied before the floor, so a negative capacity pins every
/// level at zero and a NaN capacity leaves only the floor in effect.
pub fn reservoir_levels(
    district: &DistrictParams,
    demand: &[f64; HOURS_PER_DAY],
) -> [f64; HOURS_PER_DAY] {
    let mut levels = [0.0; HOURS_PER_DAY];
    let mut level = district.initial_tank_m3;
    for (h, &d) in demand.iter().enumerate() {
        level = (level + district.inflow_m3h - d).min(district.tank_capacity_m3);
        if level < 0.0 {
            level = 0.0;
        }
        levels[h] = level;
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(demand: f64) -> [f64; HOURS_PER_DAY] {
        [demand; HOURS_PER_DAY]
    }

    #[test]
    fn balanced_demand_keeps_level() {
        let district = DistrictParams::default();
        let levels = reservoir_levels(&district, &flat(district.inflow_m3h));
        assert!(levels.iter().all(|&l| l == district.initial_tank_m3));
    }

    #[test]
    fn surplus_saturates_at_capacity() {
        let district = DistrictParams::default();
        let levels = reservoir_levels(&district, &flat(0.0));
        assert_eq!(levels[0], 2700.0);
        assert_eq!(levels[1], 2900.0);
        assert_eq!(levels[2], district.tank_capacity_m3);
        assert_eq!(levels[23], district.tank_capacity_m3);
    }

    #[test]
    fn deficit_floors_at_zero() {
        let district = DistrictParams::default();
        let levels = reservoir_levels(&district, &flat(1200.0));
        assert_eq!(levels[0], 1500.0);
        assert_eq!(levels[1], 500.0);
        assert_eq!(levels[2], 0.0);
        // recovers from the floor, not from a negative level
        let mut demand = flat(1200.0);
        demand[3] = 0.0;
        let levels = reservoir_levels(&district, &demand);
        assert_eq!(levels[3], district.inflow_m3h);
    }

    #[test]
    fn negative_capacity_pins_level_at_zero() {
        let district = DistrictParams {
            tank_capacity_m3: -1.0,
            ..DistrictParams::default()
        };
        let levels = reservoir_levels(&district, &flat(100.0));
        assert!(levels.iter().all(|&l| l == 0.0));
    }

    #[test]
    fn nan_capacity_only_floors() {
        let district = DistrictParams {
            tank_capacity_m3: f64::NAN,
            ..DistrictParams::default()
        };
        let levels = reservoir_levels(&district, &flat(0.0));
        assert_eq!(levels[0], 2700.0);
        assert_eq!(levels[23], district.initial_tank_m3 + 24.0 * district.inflow_m3h);

        let levels = reservoir_levels(&district, &flat(1200.0));
        assert_eq!(levels[2], 0.0);
    }
}
