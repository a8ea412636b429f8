//! Integration tests for the demand/tank simulation engine.

mod common;

use rand::Rng;

use peakflow_sim::sim::demand::shift_demand;
use peakflow_sim::sim::stress::classify;
use peakflow_sim::sim::{
    DistrictParams, Engine, Scenario, ShiftStrategy, SimulationConfig, TrafficLight, simulate,
    simulate_with,
};

#[test]
fn full_run_produces_24_ordered_records() {
    for scenario in Scenario::ALL {
        let result = simulate(scenario, 0.15, 0.25);
        assert_eq!(result.hourly.len(), 24);
        for (h, r) in result.hourly.iter().enumerate() {
            assert_eq!(r.hour, h, "{scenario}");
        }
    }
}

#[test]
fn hour_17_and_18_demand_examples() {
    let normal = simulate(Scenario::NormalDay, 0.15, 0.25);
    assert_eq!(normal.hourly[17].demand, 300.0);
    assert_eq!(normal.hourly[18].demand, 360.0);

    let hot = simulate(Scenario::HotDay, 0.15, 0.25);
    assert_eq!(hot.hourly[17].demand, 300.0);
    assert!((hot.hourly[18].demand - 360.0 * 1.6).abs() < 1e-9);
}

#[test]
fn football_spike_only_at_halftime() {
    let normal = simulate(Scenario::NormalDay, 0.0, 0.0);
    let football = simulate(Scenario::FootballDay, 0.0, 0.0);
    for h in 0..24 {
        let expected = if h == 20 { normal.hourly[h].demand * 2.2 } else { normal.hourly[h].demand };
        assert!((football.hourly[h].demand - expected).abs() < 1e-9, "hour {h}");
    }
}

#[test]
fn combined_day_multiplies_both_modifiers() {
    let normal = simulate(Scenario::NormalDay, 0.0, 0.0);
    let combined = simulate(Scenario::CombinedDay, 0.0, 0.0);
    let expected = normal.hourly[20].demand * 1.6 * 2.2;
    assert!((combined.hourly[20].demand - expected).abs() < 1e-9);
    assert!((combined.hourly[20].demand - 985.6).abs() < 1e-9);
}

#[test]
fn hot_day_has_more_red_hours_than_normal() {
    let normal = simulate(Scenario::NormalDay, 0.15, 0.25);
    let hot = simulate(Scenario::HotDay, 0.15, 0.25);
    assert_eq!(normal.stats.red_hours, 6);
    assert_eq!(hot.stats.red_hours, 7);
}

#[test]
fn zero_participation_leaves_demand_unchanged() {
    for scenario in Scenario::ALL {
        let result = simulate(scenario, 0.0, 0.9);
        for r in &result.hourly {
            assert_eq!(r.demand, r.demand_flex);
            assert_eq!(r.tank_level, r.tank_level_flex);
            assert_eq!(r.color, r.color_flex);
        }
    }
}

#[test]
fn strong_shifting_lowers_the_peak() {
    let result = simulate(Scenario::NormalDay, 0.5, 0.5);
    assert_eq!(result.stats.max_demand, 360.0);
    assert!(result.stats.max_demand_flex < 300.0);
    assert!(result.stats.peak_reduction() > 60.0);
}

#[test]
fn shifted_load_past_midnight_is_dropped() {
    let district = common::flat_district(100.0);
    let demand = district.baseline_demand();
    assert!(demand.iter().all(|&d| d == 400.0));

    let flex = shift_demand(&district, &demand, 0.5, 0.5, ShiftStrategy::SinglePass);
    // every hour loses a quarter; hours 3.. also receive a quarter from h-3
    for h in 0..3 {
        assert!((flex.demand[h] - 300.0).abs() < 1e-9, "hour {h}");
    }
    for h in 3..24 {
        assert!((flex.demand[h] - 400.0).abs() < 1e-9, "hour {h}");
    }
    // 21, 22 and 23 would land at 24, 25 and 26
    assert!((flex.dropped - 300.0).abs() < 1e-9);

    let total_in: f64 = demand.iter().sum();
    let total_out: f64 = flex.demand.iter().sum();
    assert!((total_in - total_out - flex.dropped).abs() < 1e-6);
}

#[test]
fn late_hours_never_feed_the_next_morning() {
    let district = common::flat_district(100.0);
    let config = SimulationConfig::new(Scenario::NormalDay, 1.0, 1.0);
    let result = simulate_with(&district, config, ShiftStrategy::SinglePass);
    // hours 0-2 only lose load; nothing arrives from 21-23
    for h in 0..3 {
        assert_eq!(result.hourly[h].demand_flex, 0.0, "hour {h}");
    }
}

#[test]
fn repeated_runs_are_identical() {
    let engine = Engine::default();
    let config = SimulationConfig::new(Scenario::CombinedDay, 0.4, 0.6);
    assert_eq!(engine.run(config), engine.run(config));
}

#[test]
fn random_rates_preserve_invariants() {
    let mut rng = common::rng(42);
    let district = DistrictParams::default();

    for _ in 0..200 {
        let scenario = Scenario::ALL[rng.random_range(0..Scenario::ALL.len())];
        let p: f64 = rng.random_range(0.0..=1.0);
        let s: f64 = rng.random_range(0.0..=1.0);
        let result = simulate(scenario, p, s);

        for r in &result.hourly {
            assert!(r.demand_flex >= 0.0);
            assert!((0.0..=district.tank_capacity_m3).contains(&r.tank_level));
            assert!((0.0..=district.tank_capacity_m3).contains(&r.tank_level_flex));
            assert_eq!(r.stress_index, r.demand / district.max_safe_flow_m3h);
            assert_eq!(
                r.color,
                classify(r.stress_index, r.tank_level / district.tank_capacity_m3)
            );
            assert_eq!(
                r.color_flex,
                classify(r.stress_index_flex, r.tank_level_flex / district.tank_capacity_m3)
            );
        }

        let red = result.hourly.iter().filter(|r| r.color == TrafficLight::Red).count();
        assert_eq!(result.stats.red_hours, red);
        let total: f64 = result.hourly.iter().map(|r| r.demand).sum();
        let total_flex: f64 = result.hourly.iter().map(|r| r.demand_flex).sum();
        assert!(total_flex <= total + 1e-6, "shifting never adds volume");
    }
}

#[test]
fn out_of_range_rates_are_clamped_in_the_echo() {
    let result = simulate(Scenario::HotDay, -0.5, 3.0);
    assert_eq!(result.config.participation_rate, 0.0);
    assert_eq!(result.config.shift_fraction, 1.0);
    assert_eq!(result.stats.red_hours, result.stats.red_hours_flex);
}

#[test]
fn stats_report_lists_red_hours() {
    let text = simulate(Scenario::HotDay, 0.15, 0.25).stats.to_string();
    assert!(text.contains("Red hours:          7"));
}

#[test]
fn unvalidated_capacity_does_not_abort_the_run() {
    let config = SimulationConfig::new(Scenario::HotDay, 0.3, 0.5);
    for capacity in [-1.0, 0.0, f64::NAN] {
        let district = DistrictParams {
            tank_capacity_m3: capacity,
            ..DistrictParams::default()
        };
        let result = simulate_with(&district, config, ShiftStrategy::Iterative { max_passes: 3 });
        assert_eq!(result.hourly.len(), 24);
        assert!(result.hourly.iter().all(|r| r.tank_level >= 0.0 && r.tank_level_flex >= 0.0));
    }
}
