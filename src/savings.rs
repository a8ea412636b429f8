//! Tariff savings from moving flexible household use off-peak.

use std::fmt;

use serde::Serialize;

use crate::actions::ActionRecommendation;

/// Share of household consumption that can move in time.
pub const FLEXIBLE_FRACTION: f64 = 0.24;
/// Peak-hour water tariff (EUR/m³).
pub const PEAK_PRICE_EUR_M3: f64 = 2.80;
/// Off-peak water tariff (EUR/m³).
pub const OFF_PEAK_PRICE_EUR_M3: f64 = 2.20;
/// Fraction of the flexible volume a household realistically moves.
pub const REALISTIC_ADOPTION: f64 = 0.7;

/// Saving per m³ moved from peak to off-peak.
pub fn price_difference() -> f64 {
    PEAK_PRICE_EUR_M3 - OFF_PEAK_PRICE_EUR_M3
}

/// Projected savings for one household.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsEstimate {
    /// Projected annual consumption (m³).
    pub annual_m3: f64,
    /// Consumption that could move off-peak (m³/year).
    pub flexible_m3: f64,
    /// Savings if all flexible use moves (EUR/year).
    pub max_annual_eur: f64,
    /// Savings at realistic adoption (EUR/year).
    pub realistic_annual_eur: f64,
    /// Realistic savings per month (EUR).
    pub realistic_monthly_eur: f64,
}

impl SavingsEstimate {
    /// Estimates savings from projected annual consumption. Negative input counts as zero.
    pub fn from_annual_m3(annual_m3: f64) -> Self {
        let annual_m3 = annual_m3.max(0.0);
        let flexible_m3 = annual_m3 * FLEXIBLE_FRACTION;
        let max_annual_eur = flexible_m3 * price_difference();
        let realistic_annual_eur = max_annual_eur * REALISTIC_ADOPTION;
        Self {
            annual_m3,
            flexible_m3,
            max_annual_eur,
            realistic_annual_eur,
            realistic_monthly_eur: realistic_annual_eur / 12.0,
        }
    }
}

impl fmt::Display for SavingsEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Annual consumption: {:.1} m³", self.annual_m3)?;
        writeln!(f, "Flexible volume:    {:.1} m³", self.flexible_m3)?;
        writeln!(f, "Max savings:        €{:.2}/year", self.max_annual_eur)?;
        write!(
            f,
            "Realistic savings:  €{:.2}/year (€{:.2}/month)",
            self.realistic_annual_eur, self.realistic_monthly_eur
        )
    }
}

/// Savings from doing `action` once off-peak (EUR).
pub fn savings_per_event(action: &ActionRecommendation) -> f64 {
    f64::from(action.water_usage_liters) / 1000.0 * price_difference()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::action_by_id;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn estimate_for_100_m3() {
        let est = SavingsEstimate::from_annual_m3(100.0);
        assert!(close(est.flexible_m3, 24.0));
        assert!(close(est.max_annual_eur, 14.4));
        assert!(close(est.realistic_annual_eur, 10.08));
        assert!(close(est.realistic_monthly_eur, 0.84));
    }

    #[test]
    fn negative_consumption_saves_nothing() {
        let est = SavingsEstimate::from_annual_m3(-5.0);
        assert_eq!(est.annual_m3, 0.0);
        assert_eq!(est.realistic_monthly_eur, 0.0);
    }

    #[test]
    fn per_event_savings_scale_with_liters() {
        let Some(dishwasher) = action_by_id("dishwasher-evening") else {
            panic!("dishwasher-evening missing from catalog");
        };
        assert!(close(savings_per_event(dishwasher), 0.012 * 0.60));
    }

    #[test]
    fn display_mentions_monthly_figure() {
        let text = SavingsEstimate::from_annual_m3(100.0).to_string();
        assert!(text.contains("€0.84/month"));
    }
}
