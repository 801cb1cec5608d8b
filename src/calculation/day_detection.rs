//! Day type detection.
//!
//! This module determines the day type (weekday, Saturday, Sunday, holiday)
//! for a calendar date, which selects both the price matrix row and the
//! day-type multiplier.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::HolidayCalendar;

/// Represents the type of day for pricing and weekend/holiday counting.
///
/// Exactly one day type applies to a date: a holiday that falls on a
/// Saturday is a [`DayType::Holiday`] only.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(day_type.to_string(), "saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday that is not a holiday.
    Saturday,
    /// Sunday that is not a holiday.
    Sunday,
    /// Any date in the holiday calendar.
    Holiday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "weekday"),
            DayType::Saturday => write!(f, "saturday"),
            DayType::Sunday => write!(f, "sunday"),
            DayType::Holiday => write!(f, "holiday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// Holiday membership is checked first and overrides the weekday.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::{get_day_type, DayType};
/// use shift_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// let holidays = HolidayCalendar::from_dates([christmas]);
///
/// assert_eq!(get_day_type(christmas, &holidays), DayType::Holiday);
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(get_day_type(saturday, &holidays), DayType::Saturday);
/// ```
pub fn get_day_type(date: NaiveDate, holidays: &HolidayCalendar) -> DayType {
    if holidays.is_holiday(date) {
        return DayType::Holiday;
    }
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}
