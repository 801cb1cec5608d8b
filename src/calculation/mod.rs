//! Calculation logic for the shift engine.
//!
//! This module contains day type detection, segmentation of a daily window
//! into shift periods, break and overtime detection, shift classification
//! and rate resolution.

mod daily_hours;
mod day_detection;
mod period_segmentation;
mod rate_resolver;
mod shift_classifier;

pub use daily_hours::{DailyHours, compute_daily_hours, minutes_to_hours};
pub use day_detection::{DayType, get_day_type};
pub use period_segmentation::{night_minutes, segment_window};
pub use rate_resolver::{NO_BASE_PRICE_REASON, RateResolver};
pub use shift_classifier::{ClassifyOptions, classify, classify_schedule};
