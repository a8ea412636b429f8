//! API response and query types.
//!
//! Hour, status and date arrive as strings so that malformed input produces
//! a JSON error body instead of the extractor's plain-text rejection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::actions::{ActionRecommendation, SelectionContext, format_suggested_time};
use crate::savings::savings_per_event;
use crate::sim::Scenario;

/// One built-in scenario.
#[derive(Debug, Serialize)]
pub struct ScenarioInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl From<Scenario> for ScenarioInfo {
    fn from(s: Scenario) -> Self {
        Self {
            id: s.id(),
            name: s.name(),
            description: s.description(),
        }
    }
}

/// Optional overrides for the simulation endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SimulationQuery {
    pub scenario: Option<String>,
    pub participation_rate: Option<f64>,
    pub shift_fraction: Option<f64>,
}

/// Optional context for the actions endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ActionsQuery {
    /// Hour of day, 0-23.
    pub hour: Option<String>,
    /// `Green`, `Yellow` or `Red`, any case.
    pub status: Option<String>,
    /// `YYYY-MM-DD`.
    pub date: Option<String>,
    pub count: Option<usize>,
}

/// A selected action with presentation helpers attached.
#[derive(Debug, Serialize)]
pub struct ActionView {
    #[serde(flatten)]
    pub action: &'static ActionRecommendation,
    /// Relative label for the start of the suggested window.
    pub suggested_label: String,
    /// Tariff savings from doing the action once off-peak (EUR).
    pub savings_eur: f64,
}

impl ActionView {
    pub fn new(action: &'static ActionRecommendation, hour: u32, date: NaiveDate) -> Self {
        Self {
            action,
            suggested_label: format_suggested_time(action.suggested_time.start, hour, date),
            savings_eur: savings_per_event(action),
        }
    }
}

/// Selection result for `GET /actions`.
#[derive(Debug, Serialize)]
pub struct ActionsResponse {
    pub context: SelectionContext,
    /// Number of catalog entries matching the context.
    pub eligible: usize,
    pub actions: Vec<ActionView>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::action_by_id;

    #[test]
    fn scenario_info_from_scenario() {
        let info = ScenarioInfo::from(Scenario::FootballDay);
        assert_eq!(info.id, "football_day");
        assert_eq!(info.name, Scenario::FootballDay.name());
    }

    #[test]
    fn action_view_flattens_catalog_fields() {
        let Some(action) = action_by_id("dishwasher-evening") else {
            panic!("dishwasher-evening missing from catalog");
        };
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default();
        let view = ActionView::new(action, 20, date);
        assert_eq!(view.suggested_label, "11:00 PM tonight");

        let json = serde_json::to_value(&view).unwrap_or_default();
        assert_eq!(json["id"], "dishwasher-evening");
        assert_eq!(json["suggested_label"], "11:00 PM tonight");
        assert_eq!(json["valid_grid_status"][0], "Red");
    }
}
