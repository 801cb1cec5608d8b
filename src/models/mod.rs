//! Core data models for the shift engine.
//!
//! This module contains all the domain models used throughout the engine.

mod holiday;
mod period;
mod pricing;
mod schedule;
mod summary;

pub use holiday::{Holiday, HolidayCalendar};
pub use period::ShiftPeriod;
pub use pricing::{BatchPrice, PriceBreakdown, PriceContext, ResolutionTier};
pub use schedule::{MINUTES_PER_DAY, ParsedSchedule, TimeWindow, format_minute_of_day};
pub use summary::{PeriodDayCounts, ShiftSegment, ShiftSummary};
