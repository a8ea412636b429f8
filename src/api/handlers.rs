//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;

use super::AppState;
use super::types::{
    ActionView, ActionsQuery, ActionsResponse, ErrorResponse, ScenarioInfo, SimulationQuery,
};
use crate::actions::{SelectionContext, select_actions};
use crate::sim::{Scenario, SimulationConfig, SimulationResult, TrafficLight};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

/// Lists the built-in scenarios.
///
/// `GET /scenarios` → 200 + `Vec<ScenarioInfo>` JSON
pub async fn get_scenarios() -> Json<Vec<ScenarioInfo>> {
    Json(Scenario::ALL.into_iter().map(ScenarioInfo::from).collect())
}

/// Simulates one day.
///
/// `GET /simulation` → 200 + `SimulationResult` JSON with the configured defaults
/// `GET /simulation?scenario=hot_day&participation_rate=0.3` → overrides
/// `GET /simulation?scenario=rainy_day` → 400 + `ErrorResponse`
pub async fn get_simulation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SimulationQuery>,
) -> Result<Json<SimulationResult>, ApiError> {
    let scenario = match query.scenario.as_deref() {
        Some(id) => id.parse::<Scenario>().map_err(bad_request)?,
        None => state.defaults.scenario,
    };
    let config = SimulationConfig::new(
        scenario,
        query.participation_rate.unwrap_or(state.defaults.participation_rate),
        query.shift_fraction.unwrap_or(state.defaults.shift_fraction),
    );

    Ok(Json(state.engine.run(config)))
}

/// Recommends actions for a context.
///
/// Missing `hour`, `date` or `count` fall back to the configured selector
/// settings. A missing `status` is read from the shifted classification of
/// that hour under the default scenario.
///
/// `GET /actions?hour=20&status=Red&date=2024-01-15&count=2` → 200 + `ActionsResponse`
/// `GET /actions?hour=24` → 400 + `ErrorResponse`
pub async fn get_actions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ActionsQuery>,
) -> Result<Json<ActionsResponse>, ApiError> {
    let hour = match query.hour.as_deref() {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| bad_request(format!("invalid hour \"{raw}\": expected 0-23")))?,
        None => state.selector.hour,
    };
    let date = match query.date.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| bad_request(format!("invalid date \"{raw}\": expected YYYY-MM-DD")))?,
        None => state.selector.date_or_today(),
    };
    let count = query.count.unwrap_or(state.selector.count);

    let status = match query.status.as_deref() {
        Some(raw) => raw.parse::<TrafficLight>().map_err(bad_request)?,
        None => default_status(&state, hour),
    };

    let context =
        SelectionContext::new(hour, status, date).map_err(|e| bad_request(e.to_string()))?;
    let selected =
        select_actions(hour, status, date, count).map_err(|e| bad_request(e.to_string()))?;

    Ok(Json(ActionsResponse {
        eligible: context.eligible().len(),
        actions: selected
            .into_iter()
            .map(|action| ActionView::new(action, hour, date))
            .collect(),
        context,
    }))
}

fn default_status(state: &AppState, hour: u32) -> TrafficLight {
    let result = state.engine.run(state.defaults);
    usize::try_from(hour)
        .ok()
        .and_then(|h| result.hourly.get(h))
        .map_or(TrafficLight::Green, |r| r.color_flex)
}
