//! Calendar context for action selection: season, day type, priority.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Season an action is suitable for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Summer,
    Winter,
    /// Not restricted. Only ever appears on catalog entries.
    All,
}

impl Season {
    /// Season of a calendar date.
    ///
    /// Months are counted from zero (January = 0) and indices 3 through 9,
    /// April through October, are summer. Every date maps to `Summer` or
    /// `Winter`; `All` is never returned.
    pub fn of_date(date: NaiveDate) -> Self {
        if (3..=9).contains(&date.month0()) {
            Season::Summer
        } else {
            Season::Winter
        }
    }

    /// Whether an action tagged `self` may be shown during `current`.
    pub fn admits(self, current: Season) -> bool {
        self == Season::All || self == current
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Season::Summer => "summer",
            Season::Winter => "winter",
            Season::All => "all",
        })
    }
}

/// Days of the week an action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weekday,
    Weekend,
    Both,
}

impl DayType {
    /// Whether an action tagged `self` may be shown on a (non-)weekend day.
    pub fn admits(self, is_weekend: bool) -> bool {
        match self {
            DayType::Weekday => !is_weekend,
            DayType::Weekend => is_weekend,
            DayType::Both => true,
        }
    }
}

/// Ranking tier; lower rank sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        })
    }
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
