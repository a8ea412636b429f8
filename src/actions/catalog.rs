//! Fixed catalog of water-saving actions a resident can be offered.

use serde::Serialize;

use crate::sim::types::TrafficLight;

use super::context::{DayType, Priority, Season};

const RED: TrafficLight = TrafficLight::Red;
const YELLOW: TrafficLight = TrafficLight::Yellow;

/// Hour window. `end` is stored as written and may be 24 or lie below
/// `start` when the window runs past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start: u32,
    pub end: u32,
}

/// One conservation action and the context in which it may be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRecommendation {
    /// Unique key.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Water moved out of the peak by doing this once (liters).
    pub water_usage_liters: u32,
    /// Reward points per completion.
    pub points: u32,
    /// Icon tag used by the presentation layer.
    pub icon: &'static str,
    /// When residents usually do this today.
    pub typical_current_time: TimeRange,
    /// Off-peak window the action suggests instead.
    pub suggested_time: TimeRange,
    pub day_type: DayType,
    pub priority: Priority,
    pub season: Season,
    /// First hour (inclusive) at which the action is shown.
    pub min_hour_to_show: u32,
    /// Last hour (inclusive) at which the action is shown.
    pub max_hour_to_show: u32,
    /// Grid statuses under which the action is relevant.
    pub valid_grid_status: &'static [TrafficLight],
}

const fn range(start: u32, end: u32) -> TimeRange {
    TimeRange { start, end }
}

static CATALOG: [ActionRecommendation; 20] = [
    // kitchen
    ActionRecommendation {
        id: "dishwasher-evening",
        title: "Dishwasher Tonight",
        description: "Run at 11:00 PM instead",
        water_usage_liters: 12,
        points: 120,
        icon: "Utensils",
        typical_current_time: range(19, 21),
        suggested_time: range(23, 6),
        day_type: DayType::Both,
        priority: Priority::High,
        season: Season::All,
        min_hour_to_show: 17,
        max_hour_to_show: 22,
        valid_grid_status: &[RED, YELLOW],
    },
    ActionRecommendation {
        id: "dishes-by-hand",
        title: "Hand-wash Dishes Later",
        description: "Wait until 10:30 PM",
        water_usage_liters: 8,
        points: 80,
        icon: "Droplets",
        typical_current_time: range(20, 21),
        suggested_time: range(22, 23),
        day_type: DayType::Both,
        priority: Priority::Medium,
        season: Season::All,
        min_hour_to_show: 19,
        max_hour_to_show: 21,
        valid_grid_status: &[RED, YELLOW],
    },
    ActionRecommendation {
        id: "coffee-prefill",
        title: "Pre-fill Coffee Maker",
        description: "Fill tonight for auto-start at 6 AM",
        water_usage_liters: 2,
        points: 20,
        icon: "Coffee",
        typical_current_time: range(6, 7),
        suggested_time: range(22, 23),
        day_type: DayType::Weekday,
        priority: Priority::Low,
        season: Season::All,
        min_hour_to_show: 20,
        max_hour_to_show: 22,
        valid_grid_status: &[YELLOW],
    },
    // laundry
    ActionRecommendation {
        id: "washing-machine-night",
        title: "Laundry Tonight",
        description: "Start washer at 11:00 PM",
        water_usage_liters: 50,
        points: 500,
        icon: "Wind",
        typical_current_time: range(18, 20),
        suggested_time: range(23, 6),
        day_type: DayType::Both,
        priority: Priority::High,
        season: Season::All,
        min_hour_to_show: 16,
        max_hour_to_show: 22,
        valid_grid_status: &[RED, YELLOW],
    },
    ActionRecommendation {
        id: "washing-machine-morning",
        title: "Laundry Tomorrow Morning",
        description: "Run at 6:00 AM before work",
        water_usage_liters: 50,
        points: 500,
        icon: "Wind",
        typical_current_time: range(18, 20),
        suggested_time: range(6, 8),
        day_type: DayType::Weekday,
        priority: Priority::High,
        season: Season::All,
        min_hour_to_show: 17,
        max_hour_to_show: 21,
        valid_grid_status: &[RED],
    },
    // bathroom
    ActionRecommendation {
        id: "shower-morning-shift",
        title: "Morning Shower Instead",
        description: "Shower at 6:30 AM tomorrow",
        water_usage_liters: 60,
        points: 600,
        icon: "Droplets",
        typical_current_time: range(19, 21),
        suggested_time: range(6, 7),
        day_type: DayType::Weekday,
        priority: Priority::Medium,
        season: Season::All,
        min_hour_to_show: 18,
        max_hour_to_show: 21,
        valid_grid_status: &[RED],
    },
    ActionRecommendation {
        id: "shower-late-evening",
        title: "Late Evening Shower",
        description: "Shower at 10:30 PM instead",
        water_usage_liters: 60,
        points: 600,
        icon: "Droplets",
        typical_current_time: range(19, 21),
        suggested_time: range(22, 23),
        day_type: DayType::Both,
        priority: Priority::Medium,
        season: Season::All,
        min_hour_to_show: 18,
        max_hour_to_show: 20,
        valid_grid_status: &[RED, YELLOW],
    },
    ActionRecommendation {
        id: "bath-weekend",
        title: "Relaxing Bath Later",
        description: "Enjoy a bath at 10:00 PM",
        water_usage_liters: 120,
        points: 1200,
        icon: "Bath",
        typical_current_time: range(19, 21),
        suggested_time: range(22, 23),
        day_type: DayType::Weekend,
        priority: Priority::Medium,
        season: Season::All,
        min_hour_to_show: 17,
        max_hour_to_show: 20,
        valid_grid_status: &[RED, YELLOW],
    },
    // outdoor
    ActionRecommendation {
        id: "garden-watering-morning",
        title: "Garden Watering",
        description: "Water at 6:00 AM (better for plants!)",
        water_usage_liters: 200,
        points: 2000,
        icon: "Sprout",
        typical_current_time: range(18, 20),
        suggested_time: range(5, 7),
        day_type: DayType::Both,
        priority: Priority::High,
        season: Season::Summer,
        min_hour_to_show: 16,
        max_hour_to_show: 20,
        valid_grid_status: &[RED, YELLOW],
    },
    ActionRecommendation {
        id: "garden-watering-evening",
        title: "Garden Watering",
        description: "Water at 11:00 PM tonight",
        water_usage_liters: 200,
        points: 2000,
        icon: "Sprout",
        typical_current_time: range(18, 20),
        suggested_time: range(23, 24),
        day_type: DayType::Both,
        priority: Priority::High,
        season: Season::Summer,
        min_hour_to_show: 17,
        max_hour_to_show: 21,
        valid_grid_status: &[RED],
    },
    ActionRecommendation {
        id: "car-wash-weekend",
        title: "Car Wash Saturday",
        description: "Wash at 7:00 AM",
        water_usage_liters: 150,
        points: 1500,
        icon: "Car",
        typical_current_time: range(14, 16),
        suggested_time: range(6, 8),
        day_type: DayType::Weekend,
        priority: Priority::Medium,
        season: Season::All,
        min_hour_to_show: 10,
        max_hour_to_show: 18,
        valid_grid_status: &[YELLOW, RED],
    },
    ActionRecommendation {
        id: "lawn-sprinkler-morning",
        title: "Lawn Sprinkler",
        description: "Run at 5:30 AM for 1 hour",
        water_usage_liters: 300,
        points: 3000,
        icon: "CloudRain",
        typical_current_time: range(18, 20),
        suggested_time: range(5, 7),
        day_type: DayType::Both,
        priority: Priority::High,
        season: Season::Summer,
        min_hour_to_show: 15,
        max_hour_to_show: 20,
        valid_grid_status: &[RED],
    },
    // cleaning
    ActionRecommendation {
        id: "floor-mopping",
        title: "Floor Mopping",
        description: "Mop Saturday at 8:00 AM",
        water_usage_liters: 10,
        points: 100,
        icon: "Waves",
        typical_current_time: range(14, 16),
        suggested_time: range(8, 10),
        day_type: DayType::Weekend,
        priority: Priority::Low,
        season: Season::All,
        min_hour_to_show: 12,
        max_hour_to_show: 17,
        valid_grid_status: &[YELLOW],
    },
    ActionRecommendation {
        id: "bathroom-deep-clean",
        title: "Bathroom Deep Clean",
        description: "Clean Sunday at 9:00 AM",
        water_usage_liters: 20,
        points: 200,
        icon: "Sparkles",
        typical_current_time: range(14, 16),
        suggested_time: range(9, 11),
        day_type: DayType::Weekend,
        priority: Priority::Low,
        season: Season::All,
        min_hour_to_show: 11,
        max_hour_to_show: 17,
        valid_grid_status: &[YELLOW],
    },
    ActionRecommendation {
        id: "window-washing",
        title: "Window Washing",
        description: "Wash windows Sunday at 8:00 AM",
        water_usage_liters: 15,
        points: 150,
        icon: "Square",
        typical_current_time: range(13, 15),
        suggested_time: range(8, 10),
        day_type: DayType::Weekend,
        priority: Priority::Low,
        season: Season::All,
        min_hour_to_show: 11,
        max_hour_to_show: 16,
        valid_grid_status: &[YELLOW],
    },
    // cooking
    ActionRecommendation {
        id: "veggie-pre-wash",
        title: "Pre-wash Vegetables",
        description: "Wash veggies at 5:00 PM for later cooking",
        water_usage_liters: 5,
        points: 50,
        icon: "Apple",
        typical_current_time: range(18, 19),
        suggested_time: range(17, 18),
        day_type: DayType::Weekday,
        priority: Priority::Low,
        season: Season::All,
        min_hour_to_show: 16,
        max_hour_to_show: 18,
        valid_grid_status: &[YELLOW],
    },
    ActionRecommendation {
        id: "pasta-pot-prefill",
        title: "Pre-fill Pasta Pot",
        description: "Fill pot at 5:00 PM, heat later",
        water_usage_liters: 3,
        points: 30,
        icon: "Soup",
        typical_current_time: range(18, 19),
        suggested_time: range(17, 18),
        day_type: DayType::Both,
        priority: Priority::Low,
        season: Season::All,
        min_hour_to_show: 16,
        max_hour_to_show: 18,
        valid_grid_status: &[YELLOW],
    },
    // misc
    ActionRecommendation {
        id: "pet-water-refill",
        title: "Pet Water Bowl",
        description: "Refill at 11:00 PM",
        water_usage_liters: 2,
        points: 20,
        icon: "Dog",
        typical_current_time: range(19, 20),
        suggested_time: range(23, 24),
        day_type: DayType::Both,
        priority: Priority::Low,
        season: Season::All,
        min_hour_to_show: 18,
        max_hour_to_show: 21,
        valid_grid_status: &[YELLOW],
    },
    ActionRecommendation {
        id: "humidifier-fill",
        title: "Humidifier Refill",
        description: "Fill at 10:00 PM before bed",
        water_usage_liters: 5,
        points: 50,
        icon: "Wind",
        typical_current_time: range(19, 20),
        suggested_time: range(22, 23),
        day_type: DayType::Both,
        priority: Priority::Low,
        season: Season::Winter,
        min_hour_to_show: 18,
        max_hour_to_show: 21,
        valid_grid_status: &[YELLOW],
    },
    ActionRecommendation {
        id: "aquarium-water-change",
        title: "Aquarium Water Change",
        description: "Change water Sunday at 9:00 AM",
        water_usage_liters: 30,
        points: 300,
        icon: "Fish",
        typical_current_time: range(14, 16),
        suggested_time: range(9, 11),
        day_type: DayType::Weekend,
        priority: Priority::Medium,
        season: Season::All,
        min_hour_to_show: 11,
        max_hour_to_show: 17,
        valid_grid_status: &[YELLOW, RED],
    },
];

/// The full catalog in its canonical order.
pub fn catalog() -> &'static [ActionRecommendation] {
    &CATALOG
}

/// Number of catalog entries.
pub fn action_count() -> usize {
    CATALOG.len()
}

/// Looks up an action by its id.
pub fn action_by_id(id: &str) -> Option<&'static ActionRecommendation> {
    CATALOG.iter().find(|action| action.id == id)
}

impl ActionRecommendation {
    /// Whether the action is relevant under `status`.
    pub fn allows_status(&self, status: TrafficLight) -> bool {
        self.valid_grid_status.contains(&status)
    }

    /// Whether `hour` lies inside the inclusive display window.
    pub fn shown_at(&self, hour: u32) -> bool {
        (self.min_hour_to_show..=self.max_hour_to_show).contains(&hour)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<&str> = catalog().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), action_count());
        assert_eq!(action_count(), 20);
    }

    #[test]
    fn display_windows_are_well_formed() {
        for action in catalog() {
            assert!(action.min_hour_to_show <= action.max_hour_to_show, "{}", action.id);
            assert!(action.max_hour_to_show <= 23, "{}", action.id);
            assert!(!action.valid_grid_status.is_empty(), "{}", action.id);
        }
    }

    #[test]
    fn no_action_targets_green_hours() {
        assert!(catalog().iter().all(|a| !a.allows_status(TrafficLight::Green)));
    }

    #[test]
    fn lookup_by_id() {
        let action = action_by_id("dishwasher-evening");
        assert_eq!(action.map(|a| a.points), Some(120));
        assert!(action.is_some_and(|a| a.allows_status(TrafficLight::Red)));
        assert!(action_by_id("does-not-exist").is_none());
    }

    #[test]
    fn display_window_is_inclusive() {
        let Some(action) = action_by_id("shower-late-evening") else {
            panic!("shower-late-evening missing from catalog");
        };
        assert!(!action.shown_at(17));
        assert!(action.shown_at(18));
        assert!(action.shown_at(20));
        assert!(!action.shown_at(21));
    }
}
