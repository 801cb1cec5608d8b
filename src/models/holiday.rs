//! Holiday models.
//!
//! This module contains the [`Holiday`] and [`HolidayCalendar`] types used to
//! override the day type of dates that fall on a holiday.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named holiday.
///
/// # Example
///
/// ```
/// use shift_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
///     name: "Finados".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Natal").
    #[serde(default)]
    pub name: String,
}

/// The set of dates treated as holidays.
///
/// Membership is by exact calendar date. A date in the calendar is priced and
/// counted as a holiday regardless of its weekday.
///
/// # Example
///
/// ```
/// use shift_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// let calendar = HolidayCalendar::from_dates([christmas]);
///
/// assert!(calendar.is_holiday(christmas));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar from a list of dates.
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Creates a calendar from named holidays.
    pub fn from_holidays(holidays: &[Holiday]) -> Self {
        Self::from_dates(holidays.iter().map(|h| h.date))
    }

    /// Checks if a given date is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns a new calendar containing the dates of both calendars.
    pub fn merged_with(&self, other: &HolidayCalendar) -> HolidayCalendar {
        HolidayCalendar {
            dates: self.dates.union(&other.dates).copied().collect(),
        }
    }

    /// Returns the number of holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the calendar holds no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates over the holiday dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self::from_dates(iter)
    }
}
