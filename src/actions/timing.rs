//! Human-readable labels for suggested action times.

use chrono::{Datelike, NaiveDate};

/// `"{h}:00 AM"` / `"{h}:00 PM"` on a 12-hour clock, midnight as 12 AM.
///
/// Hours are not wrapped: 24, a window end, reads as 12 PM like noon.
pub fn hour_label(hour: u32) -> String {
    let twelve = match hour % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if hour < 12 { "AM" } else { "PM" };
    format!("{twelve}:00 {suffix}")
}

/// Describes when a suggested hour falls relative to the current hour.
///
/// Later the same evening reads "tonight", early morning reads "tomorrow",
/// and a Thursday or Friday afternoon pointing at a morning slot reads as
/// the coming weekend day. Anything else is the bare time.
pub fn format_suggested_time(suggested_hour: u32, current_hour: u32, date: NaiveDate) -> String {
    let time = hour_label(suggested_hour);

    if suggested_hour > current_hour && suggested_hour < 24 {
        return format!("{time} tonight");
    }
    if suggested_hour >= 23 {
        return format!("{time} tonight");
    }
    if suggested_hour <= 7 {
        return format!("{time} tomorrow");
    }

    let dow = date.weekday().num_days_from_sunday();
    if dow < 6 && (6..=12).contains(&suggested_hour) {
        match 6 - dow {
            1 => return format!("Saturday at {time}"),
            2 => return format!("Sunday at {time}"),
            _ => {}
        }
    }

    time
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    #[test]
    fn hour_labels() {
        assert_eq!(hour_label(0), "12:00 AM");
        assert_eq!(hour_label(6), "6:00 AM");
        assert_eq!(hour_label(12), "12:00 PM");
        assert_eq!(hour_label(23), "11:00 PM");
        assert_eq!(hour_label(24), "12:00 PM");
    }

    #[test]
    fn later_today_is_tonight() {
        let monday = date(2024, 1, 15);
        assert_eq!(format_suggested_time(23, 20, monday), "11:00 PM tonight");
        assert_eq!(format_suggested_time(17, 16, monday), "5:00 PM tonight");
    }

    #[test]
    fn early_hours_are_tomorrow() {
        let monday = date(2024, 1, 15);
        assert_eq!(format_suggested_time(6, 20, monday), "6:00 AM tomorrow");
        assert_eq!(format_suggested_time(0, 20, monday), "12:00 AM tomorrow");
    }

    #[test]
    fn late_week_mornings_point_at_the_weekend() {
        assert_eq!(format_suggested_time(8, 14, date(2024, 1, 19)), "Saturday at 8:00 AM");
        assert_eq!(format_suggested_time(9, 14, date(2024, 1, 18)), "Sunday at 9:00 AM");
    }

    #[test]
    fn otherwise_bare_time() {
        assert_eq!(format_suggested_time(9, 14, date(2024, 1, 15)), "9:00 AM");
        assert_eq!(format_suggested_time(12, 14, date(2024, 1, 20)), "12:00 PM");
    }
}
