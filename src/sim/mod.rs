/// Scenario demand shifting.
pub mod demand;
/// District constants and the baseline demand curve.
pub mod district;
pub mod engine;
pub mod stats;
pub mod stress;
pub mod tank;
pub mod types;

pub use demand::ShiftStrategy;
pub use district::DistrictParams;
pub use engine::{Engine, simulate, simulate_with};
pub use stats::SimulationStats;
pub use types::{HourlyRecord, Scenario, SimulationConfig, SimulationResult, TrafficLight};
