/// Static action catalog.
pub mod catalog;
pub mod context;
/// Context filtering and date-seeded ranking.
pub mod selector;
pub mod timing;

pub use catalog::{ActionRecommendation, TimeRange, action_by_id, action_count, catalog};
pub use context::{DayType, Priority, Season, is_weekend};
pub use selector::{
    ActionSummary, SelectionContext, SelectorError, daily_seed, eligible_count, select_actions,
};
pub use timing::{format_suggested_time, hour_label};
