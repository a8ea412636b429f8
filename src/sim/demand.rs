//! Voluntary load shifting from peak hours to later hours.

use serde::{Deserialize, Serialize};

use super::district::DistrictParams;
use super::stress::{RED_STRESS, classify};
use super::tank::reservoir_levels;
use super::types::{HOURS_PER_DAY, TrafficLight};

/// Hours between a shifted load's source and its destination.
pub const SHIFT_OFFSET_HOURS: usize = 3;

/// How shifted demand is derived from the baseline series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ShiftStrategy {
    /// One pass over raw baseline demand. Source hours are those whose
    /// baseline demand exceeds the RED stress threshold; tank levels are not
    /// consulted.
    #[default]
    SinglePass,
    /// Starts from the single pass, then re-classifies the shifted series
    /// (stress and reservoir) and shifts again from hours still RED, until
    /// nothing moves or `max_passes` passes have run.
    Iterative {
        /// Upper bound on passes, including the first one.
        max_passes: usize,
    },
}

/// Shifted demand series with per-hour bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct FlexDemand {
    /// Demand after shifting (m³/h).
    pub demand: [f64; HOURS_PER_DAY],
    /// Total volume moved out of each hour (m³/h).
    pub shifted_out: [f64; HOURS_PER_DAY],
    /// Total volume moved into each hour (m³/h).
    pub shifted_in: [f64; HOURS_PER_DAY],
    /// Volume whose destination fell past 23:00 and was discarded.
    pub dropped: f64,
    /// Number of shifting passes that moved load.
    pub passes: usize,
}

impl FlexDemand {
    fn unshifted(demand: [f64; HOURS_PER_DAY]) -> Self {
        Self {
            demand,
            shifted_out: [0.0; HOURS_PER_DAY],
            shifted_in: [0.0; HOURS_PER_DAY],
            dropped: 0.0,
            passes: 0,
        }
    }

    /// Moves `participation_rate * shift_fraction` of the current demand out
    /// of every hour flagged by `is_source`. All amounts are taken from the
    /// demand as it stood before the pass; arrivals are applied afterwards.
    /// Returns whether anything moved.
    fn shift_pass(
        &mut self,
        participation_rate: f64,
        shift_fraction: f64,
        is_source: impl Fn(usize, f64) -> bool,
    ) -> bool {
        let mut incoming = [0.0; HOURS_PER_DAY];
        let mut moved = false;

        for h in 0..HOURS_PER_DAY {
            let current = self.demand[h];
            if !is_source(h, current) {
                continue;
            }
            // (demand * p) * s, not demand * (p * s)
            let amount = current * participation_rate * shift_fraction;
            if amount == 0.0 {
                continue;
            }
            moved = true;
            self.demand[h] -= amount;
            self.shifted_out[h] += amount;

            let target = h + SHIFT_OFFSET_HOURS;
            if target < HOURS_PER_DAY {
                incoming[target] += amount;
            } else {
                self.dropped += amount;
            }
        }

        for (h, amount) in incoming.iter().enumerate() {
            self.demand[h] += amount;
            self.shifted_in[h] += amount;
        }
        if moved {
            self.passes += 1;
        }
        moved
    }
}

/// Derives the flexible demand series from scenario demand.
///
/// `participation_rate * shift_fraction` of each source hour's demand moves
/// to `h + 3`. Load whose destination would be past 23:00 is dropped rather
/// than wrapped into the next day.
pub fn shift_demand(
    district: &DistrictParams,
    demand: &[f64; HOURS_PER_DAY],
    participation_rate: f64,
    shift_fraction: f64,
    strategy: ShiftStrategy,
) -> FlexDemand {
    let threshold = district.max_safe_flow_m3h * RED_STRESS;
    let mut flex = FlexDemand::unshifted(*demand);

    // Source hours come from the raw series, not from partially shifted values.
    flex.shift_pass(participation_rate, shift_fraction, |h, _| demand[h] > threshold);

    if let ShiftStrategy::Iterative { max_passes } = strategy {
        for _ in 1..max_passes {
            let levels = reservoir_levels(district, &flex.demand);
            let moved = flex.shift_pass(participation_rate, shift_fraction, |h, current| {
                let color = classify(
                    district.stress_index(current),
                    district.tank_fraction(levels[h]),
                );
                color == TrafficLight::Red && current > 0.0
            });
            if !moved {
                break;
            }
        }
        tracing::debug!(passes = flex.passes, dropped = flex.dropped, "iterative shift settled");
    }

    flex
}
