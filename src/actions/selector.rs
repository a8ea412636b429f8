//! Context filtering and date-seeded ranking of catalog actions.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::sim::types::TrafficLight;

use super::catalog::{ActionRecommendation, catalog};
use super::context::{Season, is_weekend};

/// Number of actions `ActionSummary` lists.
const SUMMARY_LIMIT: usize = 10;

/// Rejected selector input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The hour must be 0-23; contextual queries never wrap.
    #[error("invalid hour {hour}: expected 0-23")]
    InvalidHour { hour: u32 },
}

/// The query context an action must match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionContext {
    pub hour: u32,
    pub grid_status: TrafficLight,
    pub date: NaiveDate,
    pub season: Season,
    pub is_weekend: bool,
}

impl SelectionContext {
    /// Derives season and day type from `date`.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::InvalidHour` if `hour > 23`.
    pub fn new(hour: u32, grid_status: TrafficLight, date: NaiveDate) -> Result<Self, SelectorError> {
        if hour > 23 {
            return Err(SelectorError::InvalidHour { hour });
        }
        Ok(Self {
            hour,
            grid_status,
            date,
            season: Season::of_date(date),
            is_weekend: is_weekend(date),
        })
    }

    /// Whether `action` may be offered in this context.
    pub fn admits(&self, action: &ActionRecommendation) -> bool {
        action.day_type.admits(self.is_weekend)
            && action.shown_at(self.hour)
            && action.allows_status(self.grid_status)
            && action.season.admits(self.season)
    }

    /// Catalog entries admitted by this context, in catalog order.
    pub fn eligible(&self) -> Vec<&'static ActionRecommendation> {
        catalog().iter().filter(|a| self.admits(a)).collect()
    }

    /// Shuffle seed shared by every query on the same calendar date.
    pub fn daily_seed(&self) -> i64 {
        daily_seed(self.date)
    }
}

/// `year * 10000 + month * 100 + day`, e.g. 20240115.
pub fn daily_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Fractional part of `sin(x) * 10000`, in `[0, 1)`.
fn seeded_unit(x: f64) -> f64 {
    let v = x.sin() * 10_000.0;
    v - v.floor()
}

/// Fisher-Yates shuffle driven by `seeded_unit(seed + i)` at step `i`.
fn shuffle_seeded<T>(items: &mut [T], seed: i64) {
    for i in (1..items.len()).rev() {
        let r = seeded_unit(seed as f64 + i as f64);
        let j = ((r * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
}

/// Picks up to `count` actions for the given hour, grid status and date.
///
/// Eligible actions are shuffled with the date's seed and then stably sorted
/// by priority, so ties within a tier keep the shuffled order. The same date
/// always produces the same ordering.
///
/// # Errors
///
/// Returns `SelectorError::InvalidHour` if `current_hour > 23`.
pub fn select_actions(
    current_hour: u32,
    grid_status: TrafficLight,
    current_date: NaiveDate,
    count: usize,
) -> Result<Vec<&'static ActionRecommendation>, SelectorError> {
    let ctx = SelectionContext::new(current_hour, grid_status, current_date)?;
    Ok(rank(&ctx, count))
}

fn rank(ctx: &SelectionContext, count: usize) -> Vec<&'static ActionRecommendation> {
    let mut eligible = ctx.eligible();
    if eligible.is_empty() {
        return eligible;
    }

    shuffle_seeded(&mut eligible, ctx.daily_seed());
    eligible.sort_by_key(|a| a.priority.rank());
    eligible.truncate(count);

    tracing::debug!(
        hour = ctx.hour,
        status = %ctx.grid_status,
        season = %ctx.season,
        selected = eligible.len(),
        "selected actions"
    );
    eligible
}

/// Number of actions eligible in the given context.
///
/// # Errors
///
/// Returns `SelectorError::InvalidHour` if `current_hour > 23`.
pub fn eligible_count(
    current_hour: u32,
    grid_status: TrafficLight,
    current_date: NaiveDate,
) -> Result<usize, SelectorError> {
    let ctx = SelectionContext::new(current_hour, grid_status, current_date)?;
    Ok(ctx.eligible().len())
}

/// Plain-text snapshot of a selection, for logs and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionSummary {
    pub context: SelectionContext,
    pub eligible: usize,
    pub selected: Vec<&'static ActionRecommendation>,
}

impl ActionSummary {
    /// Runs the selector and captures up to ten actions.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::InvalidHour` if `current_hour > 23`.
    pub fn new(
        current_hour: u32,
        grid_status: TrafficLight,
        current_date: NaiveDate,
    ) -> Result<Self, SelectorError> {
        let context = SelectionContext::new(current_hour, grid_status, current_date)?;
        Ok(Self {
            context,
            eligible: context.eligible().len(),
            selected: rank(&context, SUMMARY_LIMIT),
        })
    }
}

impl fmt::Display for ActionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ctx = &self.context;
        writeln!(f, "Current Context:")?;
        writeln!(f, "- Hour: {}:00", ctx.hour)?;
        writeln!(f, "- Grid: {}", ctx.grid_status)?;
        writeln!(f, "- Day: {}", if ctx.is_weekend { "Weekend" } else { "Weekday" })?;
        writeln!(f, "- Season: {}", ctx.season)?;
        writeln!(f, "- Eligible actions: {}", self.eligible)?;
        writeln!(f, "- Selected: {}", self.selected.len())?;
        writeln!(f)?;
        write!(f, "Selected Actions:")?;
        for a in &self.selected {
            write!(f, "\n- {} ({} pts, {} priority)", a.title, a.points, a.priority)?;
        }
        Ok(())
    }
}
