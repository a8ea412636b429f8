//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use peakflow_sim::sim::DistrictParams;

/// Calendar date; panics on an impossible date.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

/// Monday 2024-01-15, a winter weekday.
pub fn winter_monday() -> NaiveDate {
    date(2024, 1, 15)
}

/// Saturday 2024-06-15, a summer weekend day.
pub fn summer_saturday() -> NaiveDate {
    date(2024, 6, 15)
}

/// Reference district with the same per-household usage in every hour.
///
/// 100 L/h over 4000 households gives 400 m³/h, above the RED threshold
/// all day, so every hour is a shift source.
pub fn flat_district(liters_per_hour: f64) -> DistrictParams {
    DistrictParams {
        profile_liters: [liters_per_hour; 24],
        ..DistrictParams::default()
    }
}

/// Deterministic RNG for property sweeps.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
