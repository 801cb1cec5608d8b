//! Time window and parsed schedule models.
//!
//! This module defines [`TimeWindow`], a daily wall-clock window expressed in
//! minutes of day, and [`ParsedSchedule`], the output of the schedule text
//! parser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A daily time window in minutes of day.
///
/// When `end_minute <= start_minute` the window crosses midnight into the
/// next day. A window with equal bounds therefore covers a full 24 hours.
///
/// # Example
///
/// ```
/// use shift_engine::models::TimeWindow;
///
/// let window = TimeWindow::new(23 * 60, 2 * 60).unwrap();
/// assert!(window.is_overnight());
/// assert_eq!(window.duration_minutes(), 180);
/// assert_eq!(window.start_label(), "23:00");
/// assert_eq!(window.end_label(), "02:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Start of the window, in minutes since midnight.
    pub start_minute: u32,
    /// End of the window, in minutes since midnight.
    pub end_minute: u32,
}

impl TimeWindow {
    /// Creates a validated time window.
    ///
    /// Returns [`EngineError::InvalidWindow`] if either bound is outside `[0, 1440)`.
    pub fn new(start_minute: u32, end_minute: u32) -> EngineResult<Self> {
        let window = Self {
            start_minute,
            end_minute,
        };
        window.validate()?;
        Ok(window)
    }

    /// Checks that both bounds lie within a single day.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_minute >= MINUTES_PER_DAY || self.end_minute >= MINUTES_PER_DAY {
            return Err(EngineError::InvalidWindow {
                start: self.start_minute,
                end: self.end_minute,
            });
        }
        Ok(())
    }

    /// Returns true if the window crosses midnight.
    pub fn is_overnight(&self) -> bool {
        self.end_minute <= self.start_minute
    }

    /// Total length of the window in minutes, accounting for wraparound.
    pub fn duration_minutes(&self) -> u32 {
        if self.is_overnight() {
            (MINUTES_PER_DAY - self.start_minute) + self.end_minute
        } else {
            self.end_minute - self.start_minute
        }
    }

    /// Splits the window into chronological `[from, to)` spans inside one day.
    ///
    /// An overnight window yields `[start, 1440)` followed by `[0, end)`;
    /// empty spans are dropped.
    pub fn day_spans(&self) -> Vec<(u32, u32)> {
        if !self.is_overnight() {
            return vec![(self.start_minute, self.end_minute)];
        }
        let mut spans = vec![(self.start_minute, MINUTES_PER_DAY)];
        if self.end_minute > 0 {
            spans.push((0, self.end_minute));
        }
        spans
    }

    /// The start of the window formatted as `HH:MM`.
    pub fn start_label(&self) -> String {
        format_minute_of_day(self.start_minute)
    }

    /// The end of the window formatted as `HH:MM`.
    pub fn end_label(&self) -> String {
        format_minute_of_day(self.end_minute)
    }
}

/// Formats a minute of day as `HH:MM`.
pub fn format_minute_of_day(minute: u32) -> String {
    format!("{:02}:{:02}", (minute / 60) % 24, minute % 60)
}

/// The structured result of parsing a free-text schedule.
///
/// `dates` is ascending, free of duplicates and never empty for a schedule
/// returned by the parser. `window` is `None` when the text named dates but
/// no time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSchedule {
    /// Every calendar date the schedule covers.
    pub dates: Vec<NaiveDate>,
    /// The daily time window, if one was stated.
    pub window: Option<TimeWindow>,
    /// The text the schedule was parsed from.
    pub raw_text: String,
}

impl ParsedSchedule {
    /// Returns the number of dates in the schedule.
    pub fn day_count(&self) -> usize {
        self.dates.len()
    }

    /// Returns the earliest date, if any.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// Returns the latest date, if any.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }
}
