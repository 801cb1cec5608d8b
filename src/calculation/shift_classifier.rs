//! Shift classification.
//!
//! This module combines period segmentation, night-differential measurement,
//! break/overtime detection and day-type counting into a [`ShiftSummary`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ShiftRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    HolidayCalendar, ParsedSchedule, PeriodDayCounts, ShiftPeriod, ShiftSummary, TimeWindow,
};

use super::daily_hours::{compute_daily_hours, minutes_to_hours};
use super::day_detection::{DayType, get_day_type};
use super::period_segmentation::{night_minutes, segment_window};

/// Caller-supplied facts that the schedule text itself does not carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyOptions {
    /// Stated break flag. `None` lets the classifier infer the break.
    #[serde(default)]
    pub explicit_break: Option<bool>,
    /// Marks every segment as overtime.
    #[serde(default)]
    pub has_extra_global: bool,
    /// Marks the segments of these periods as overtime.
    #[serde(default)]
    pub extra_periods: Vec<ShiftPeriod>,
    /// Number of workers requested per day.
    #[serde(default = "default_collaborators")]
    pub collaborators_per_day: u32,
}

fn default_collaborators() -> u32 {
    1
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            explicit_break: None,
            has_extra_global: false,
            extra_periods: Vec::new(),
            collaborators_per_day: default_collaborators(),
        }
    }
}

/// Classifies a daily window repeated over a set of dates.
///
/// # Arguments
///
/// * `window` - The daily time window
/// * `dates` - Every date the window is worked on
/// * `holidays` - Dates treated as holidays
/// * `rules` - Period bands, break and overtime rules
/// * `options` - Caller-supplied break and overtime facts
///
/// # Errors
///
/// - [`EngineError::InvalidWindow`] if a window bound lies outside `[0, 1440)`
/// - [`EngineError::InvalidDateRange`] if `dates` is empty
///
/// # Example
///
/// ```
/// use shift_engine::calculation::{ClassifyOptions, classify};
/// use shift_engine::config::ShiftRules;
/// use shift_engine::models::{HolidayCalendar, ShiftPeriod, TimeWindow};
/// use chrono::NaiveDate;
///
/// let window = TimeWindow::new(23 * 60, 2 * 60).unwrap();
/// let dates = [NaiveDate::from_ymd_opt(2026, 9, 10).unwrap()];
///
/// let summary = classify(
///     &window,
///     &dates,
///     &HolidayCalendar::new(),
///     &ShiftRules::default(),
///     &ClassifyOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(summary.periods(), vec![ShiftPeriod::Noite, ShiftPeriod::Madrugada]);
/// assert!(summary.has_night_differential);
/// assert!(!summary.has_break);
/// ```
pub fn classify(
    window: &TimeWindow,
    dates: &[NaiveDate],
    holidays: &HolidayCalendar,
    rules: &ShiftRules,
    options: &ClassifyOptions,
) -> EngineResult<ShiftSummary> {
    window.validate()?;
    if dates.is_empty() {
        return Err(EngineError::InvalidDateRange {
            message: "schedule has no dates".to_string(),
        });
    }

    let extra_periods: Vec<ShiftPeriod> = if options.has_extra_global {
        ShiftPeriod::DAILY.to_vec()
    } else {
        options.extra_periods.clone()
    };
    let segments = segment_window(window, rules, &extra_periods);

    let day_count = dates.len() as u32;
    let mut period_days = PeriodDayCounts::default();
    for segment in &segments {
        period_days.add(segment.period, day_count);
    }

    let daily = compute_daily_hours(window.duration_minutes(), options.explicit_break, rules);
    let night_hours = minutes_to_hours(night_minutes(window, rules));
    let normal_hours = (daily.paid_hours - night_hours).max(Decimal::ZERO);
    let has_overtime = daily.has_overtime() || segments.iter().any(|s| s.has_extra);

    let (weekend_days, holiday_days) = count_special_days(dates, holidays);

    debug!(
        start = window.start_minute,
        end = window.end_minute,
        days = day_count,
        segments = segments.len(),
        has_break = daily.has_break,
        has_overtime,
        "Classified schedule window"
    );

    Ok(ShiftSummary {
        day_count,
        shift_count: segments.len() as u32,
        hours_per_day: daily.paid_hours,
        total_hours: daily.paid_hours * Decimal::from(day_count),
        has_break: daily.has_break,
        break_stated: daily.break_stated,
        window_hours: daily.gross_hours,
        has_overtime,
        has_weekend: weekend_days > 0,
        weekend_days,
        has_holiday: holiday_days > 0,
        holiday_days,
        has_night_differential: night_hours > Decimal::ZERO,
        night_hours_per_day: night_hours,
        normal_hours_per_day: normal_hours,
        window_start: window.start_label(),
        window_end: window.end_label(),
        collaborators_per_day: options.collaborators_per_day,
        period_days,
        segments,
    })
}

/// Classifies a parsed schedule.
///
/// A schedule without a time window yields a summary that counts dates,
/// weekends and holidays but has no hours or segments.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::{ClassifyOptions, classify_schedule};
/// use shift_engine::config::ShiftRules;
/// use shift_engine::models::{HolidayCalendar, ParsedSchedule};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let schedule = ParsedSchedule {
///     dates: vec![NaiveDate::from_ymd_opt(2026, 11, 7).unwrap()],
///     window: None,
///     raw_text: "07/11".to_string(),
/// };
///
/// let summary = classify_schedule(
///     &schedule,
///     &HolidayCalendar::new(),
///     &ShiftRules::default(),
///     &ClassifyOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(summary.weekend_days, 1);
/// assert_eq!(summary.hours_per_day, Decimal::ZERO);
/// assert!(summary.segments.is_empty());
/// ```
pub fn classify_schedule(
    schedule: &ParsedSchedule,
    holidays: &HolidayCalendar,
    rules: &ShiftRules,
    options: &ClassifyOptions,
) -> EngineResult<ShiftSummary> {
    match &schedule.window {
        Some(window) => classify(window, &schedule.dates, holidays, rules, options),
        None => dates_only_summary(&schedule.dates, holidays, options),
    }
}

fn dates_only_summary(
    dates: &[NaiveDate],
    holidays: &HolidayCalendar,
    options: &ClassifyOptions,
) -> EngineResult<ShiftSummary> {
    if dates.is_empty() {
        return Err(EngineError::InvalidDateRange {
            message: "schedule has no dates".to_string(),
        });
    }
    let (weekend_days, holiday_days) = count_special_days(dates, holidays);

    Ok(ShiftSummary {
        day_count: dates.len() as u32,
        shift_count: 0,
        hours_per_day: Decimal::ZERO,
        total_hours: Decimal::ZERO,
        has_break: false,
        break_stated: options.explicit_break.is_some(),
        window_hours: Decimal::ZERO,
        has_overtime: options.has_extra_global,
        has_weekend: weekend_days > 0,
        weekend_days,
        has_holiday: holiday_days > 0,
        holiday_days,
        has_night_differential: false,
        night_hours_per_day: Decimal::ZERO,
        normal_hours_per_day: Decimal::ZERO,
        window_start: String::new(),
        window_end: String::new(),
        collaborators_per_day: options.collaborators_per_day,
        period_days: PeriodDayCounts::default(),
        segments: Vec::new(),
    })
}

/// Returns `(weekend_days, holiday_days)`. A holiday weekend date counts as
/// a holiday only.
fn count_special_days(dates: &[NaiveDate], holidays: &HolidayCalendar) -> (u32, u32) {
    dates
        .iter()
        .fold((0, 0), |(weekend, holiday), &date| match get_day_type(date, holidays) {
            DayType::Holiday => (weekend, holiday + 1),
            day_type if day_type.is_weekend() => (weekend + 1, holiday),
            _ => (weekend, holiday),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window(start: u32, end: u32) -> TimeWindow {
        TimeWindow::new(start, end).unwrap()
    }

    fn run(window: &TimeWindow, dates: &[NaiveDate]) -> ShiftSummary {
        classify(
            window,
            dates,
            &HolidayCalendar::new(),
            &ShiftRules::default(),
            &ClassifyOptions::default(),
        )
        .unwrap()
    }

    // ==========================================================================
    // SC-001: overnight 23:00-02:00
    // ==========================================================================
    #[test]
    fn test_sc_001_overnight_window() {
        let summary = run(&window(1380, 120), &[date(2026, 9, 10)]);

        assert_eq!(summary.periods(), vec![ShiftPeriod::Noite, ShiftPeriod::Madrugada]);
        assert_eq!(summary.minutes_in(ShiftPeriod::Noite), 60);
        assert_eq!(summary.minutes_in(ShiftPeriod::Madrugada), 120);
        assert_eq!(summary.window_hours, dec("3"));
        assert_eq!(summary.hours_per_day, dec("3"));
        assert!(!summary.has_break);
        assert!(summary.has_night_differential);
        assert_eq!(summary.night_hours_per_day, dec("3"));
        assert_eq!(summary.normal_hours_per_day, Decimal::ZERO);
        assert_eq!(summary.window_start, "23:00");
        assert_eq!(summary.window_end, "02:00");
    }

    // ==========================================================================
    // SC-002: 09:00-18:00 over five days
    // ==========================================================================
    #[test]
    fn test_sc_002_day_shift_over_range() {
        let dates: Vec<NaiveDate> = (29..=30)
            .map(|d| date(2026, 9, d))
            .chain((1..=3).map(|d| date(2026, 10, d)))
            .collect();
        let summary = run(&window(540, 1080), &dates);

        assert_eq!(summary.day_count, 5);
        assert!(summary.has_break);
        assert!(!summary.break_stated);
        assert_eq!(summary.hours_per_day, dec("8"));
        assert!(summary.hours_per_day >= dec("8"));
        assert_eq!(summary.total_hours, dec("40"));
        assert!(!summary.has_overtime);
        assert_eq!(summary.period_days.manha, 5);
        assert_eq!(summary.period_days.tarde, 5);
        assert_eq!(summary.period_days.noite, 0);
        // 2026-10-03 is a Saturday
        assert_eq!(summary.weekend_days, 1);
    }

    // ==========================================================================
    // SC-003: long day triggers overtime
    // ==========================================================================
    #[test]
    fn test_sc_003_long_day_has_overtime() {
        // 08:00-20:00 => 12h gross, 11h paid
        let summary = run(&window(480, 1200), &[date(2026, 10, 14)]);
        assert_eq!(summary.hours_per_day, dec("11"));
        assert!(summary.has_overtime);
        assert_eq!(summary.shift_count, 3);
    }

    // ==========================================================================
    // SC-004: stated break honored
    // ==========================================================================
    #[test]
    fn test_sc_004_stated_no_break() {
        let options = ClassifyOptions {
            explicit_break: Some(false),
            ..ClassifyOptions::default()
        };
        let summary = classify(
            &window(540, 1080),
            &[date(2026, 10, 14)],
            &HolidayCalendar::new(),
            &ShiftRules::default(),
            &options,
        )
        .unwrap();

        assert!(!summary.has_break);
        assert!(summary.break_stated);
        assert_eq!(summary.hours_per_day, dec("9"));
        assert!(summary.has_overtime);
    }

    // ==========================================================================
    // SC-005: holiday weekend counted once
    // ==========================================================================
    #[test]
    fn test_sc_005_holiday_saturday_not_weekend() {
        // 2026-11-07 Saturday (holiday), 2026-11-08 Sunday
        let holidays = HolidayCalendar::from_dates([date(2026, 11, 7)]);
        let summary = classify(
            &window(540, 1020),
            &[date(2026, 11, 7), date(2026, 11, 8)],
            &holidays,
            &ShiftRules::default(),
            &ClassifyOptions::default(),
        )
        .unwrap();

        assert_eq!(summary.holiday_days, 1);
        assert_eq!(summary.weekend_days, 1);
        assert!(summary.has_holiday);
        assert!(summary.has_weekend);
    }

    // ==========================================================================
    // SC-006: caller-flagged extra period
    // ==========================================================================
    #[test]
    fn test_sc_006_extra_period_sets_overtime() {
        let options = ClassifyOptions {
            extra_periods: vec![ShiftPeriod::Noite],
            ..ClassifyOptions::default()
        };
        let summary = classify(
            &window(17 * 60, 20 * 60),
            &[date(2026, 10, 14)],
            &HolidayCalendar::new(),
            &ShiftRules::default(),
            &options,
        )
        .unwrap();

        assert!(summary.has_overtime);
        assert!(summary.segments.iter().any(|s| s.has_extra));
    }

    #[test]
    fn test_global_extra_flags_every_segment() {
        let options = ClassifyOptions {
            has_extra_global: true,
            ..ClassifyOptions::default()
        };
        let summary = classify(
            &window(1380, 120),
            &[date(2026, 10, 14)],
            &HolidayCalendar::new(),
            &ShiftRules::default(),
            &options,
        )
        .unwrap();
        assert!(summary.segments.iter().all(|s| s.has_extra));
    }

    #[test]
    fn test_normal_hours_exclude_night_minutes() {
        // 18:00-02:00 => 8h gross, 1h break, 4h night
        let summary = run(&window(1080, 120), &[date(2026, 10, 14)]);
        assert_eq!(summary.hours_per_day, dec("7"));
        assert_eq!(summary.night_hours_per_day, dec("4"));
        assert_eq!(summary.normal_hours_per_day, dec("3"));
    }

    #[test]
    fn test_collaborators_carried_through() {
        let options = ClassifyOptions {
            collaborators_per_day: 4,
            ..ClassifyOptions::default()
        };
        let summary = classify(
            &window(540, 600),
            &[date(2026, 10, 14)],
            &HolidayCalendar::new(),
            &ShiftRules::default(),
            &options,
        )
        .unwrap();
        assert_eq!(summary.collaborators_per_day, 4);
    }

    #[test]
    fn test_empty_dates_rejected() {
        let result = classify(
            &window(540, 600),
            &[],
            &HolidayCalendar::new(),
            &ShiftRules::default(),
            &ClassifyOptions::default(),
        );
        assert!(matches!(result, Err(EngineError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_out_of_range_window_rejected() {
        let bad = TimeWindow {
            start_minute: 1500,
            end_minute: 60,
        };
        let result = classify(
            &bad,
            &[date(2026, 10, 14)],
            &HolidayCalendar::new(),
            &ShiftRules::default(),
            &ClassifyOptions::default(),
        );
        match result {
            Err(EngineError::InvalidWindow { start, end }) => {
                assert_eq!((start, end), (1500, 60));
            }
            _ => panic!("Expected InvalidWindow error"),
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let dates = [date(2026, 10, 14), date(2026, 10, 15)];
        assert_eq!(run(&window(1320, 360), &dates), run(&window(1320, 360), &dates));
    }

    #[test]
    fn test_schedule_without_window() {
        let schedule = ParsedSchedule {
            dates: vec![date(2026, 10, 14)],
            window: None,
            raw_text: "14/10".to_string(),
        };
        let summary = classify_schedule(
            &schedule,
            &HolidayCalendar::new(),
            &ShiftRules::default(),
            &ClassifyOptions::default(),
        )
        .unwrap();
        assert_eq!(summary.day_count, 1);
        assert_eq!(summary.shift_count, 0);
        assert!(summary.window_start.is_empty());
    }
}
