//! Traffic-light classification from flow stress and reservoir level.

use super::types::TrafficLight;

/// Stress index at or above which an hour is RED.
pub const RED_STRESS: f64 = 0.85;
/// Stress index at or above which an hour is at least YELLOW.
pub const YELLOW_STRESS: f64 = 0.60;
/// Reservoir fraction below which an hour is RED.
pub const RED_TANK_FRACTION: f64 = 0.25;
/// Reservoir fraction below which an hour is at least YELLOW.
pub const YELLOW_TANK_FRACTION: f64 = 0.40;

/// Classifies one hour.
///
/// The RED test runs first: a high stress with a comfortable reservoir is RED,
/// never YELLOW.
pub fn classify(stress_index: f64, tank_fraction: f64) -> TrafficLight {
    if stress_index >= RED_STRESS || tank_fraction < RED_TANK_FRACTION {
        TrafficLight::Red
    } else if stress_index >= YELLOW_STRESS || tank_fraction < YELLOW_TANK_FRACTION {
        TrafficLight::Yellow
    } else {
        TrafficLight::Green
    }
}
