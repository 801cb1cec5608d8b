//! Period segmentation of a daily time window.
//!
//! Splits a window at midnight and then against the period band table,
//! producing one [`ShiftSegment`] per period touched. Also measures the
//! minutes that earn the night differential.

use crate::config::ShiftRules;
use crate::models::{MINUTES_PER_DAY, ShiftPeriod, ShiftSegment, TimeWindow};

/// Splits a window into per-period segments.
///
/// Segments are ordered by when the window first enters each period. A
/// period touched twice (e.g. a 05:00–05:00 window) is merged into a single
/// segment. Segment minutes always sum to the window duration when the bands
/// tile the day.
///
/// `extra_periods` marks segments as overtime explicitly.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::segment_window;
/// use shift_engine::config::ShiftRules;
/// use shift_engine::models::{ShiftPeriod, TimeWindow};
///
/// let window = TimeWindow::new(23 * 60, 2 * 60).unwrap();
/// let segments = segment_window(&window, &ShiftRules::default(), &[]);
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].period, ShiftPeriod::Noite);
/// assert_eq!(segments[0].total_minutes, 60);
/// assert_eq!(segments[1].period, ShiftPeriod::Madrugada);
/// assert_eq!(segments[1].total_minutes, 120);
/// ```
pub fn segment_window(
    window: &TimeWindow,
    rules: &ShiftRules,
    extra_periods: &[ShiftPeriod],
) -> Vec<ShiftSegment> {
    let mut bands: Vec<_> = rules.bands.iter().collect();
    bands.sort_by_key(|b| b.start_minute);

    let mut segments: Vec<ShiftSegment> = Vec::new();
    for (from, to) in window.day_spans() {
        for band in &bands {
            let minutes = overlap(from, to, band.start_minute, band.end_minute);
            if minutes == 0 {
                continue;
            }
            match segments.iter_mut().find(|s| s.period == band.period) {
                Some(segment) => segment.total_minutes += minutes,
                None => segments.push(ShiftSegment {
                    period: band.period,
                    total_minutes: minutes,
                    has_extra: extra_periods.contains(&band.period),
                }),
            }
        }
    }
    segments
}

/// Counts the minutes of a window inside the night-differential interval.
///
/// The interval runs from `night_start_minute` to `night_end_minute`,
/// wrapping past midnight when the start is the later of the two.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::night_minutes;
/// use shift_engine::config::ShiftRules;
/// use shift_engine::models::TimeWindow;
///
/// // 20:00 to 03:00 earns 22:00-03:00
/// let window = TimeWindow::new(20 * 60, 3 * 60).unwrap();
/// assert_eq!(night_minutes(&window, &ShiftRules::default()), 5 * 60);
/// ```
pub fn night_minutes(window: &TimeWindow, rules: &ShiftRules) -> u32 {
    let night = night_intervals(rules.night_start_minute, rules.night_end_minute);
    window
        .day_spans()
        .into_iter()
        .map(|(from, to)| {
            night
                .iter()
                .map(|&(start, end)| overlap(from, to, start, end))
                .sum::<u32>()
        })
        .sum()
}

fn night_intervals(start: u32, end: u32) -> Vec<(u32, u32)> {
    if start < end {
        vec![(start, end)]
    } else {
        vec![(start, MINUTES_PER_DAY), (0, end)]
    }
}

fn overlap(from: u32, to: u32, start: u32, end: u32) -> u32 {
    to.min(end).saturating_sub(from.max(start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn window(start: u32, end: u32) -> TimeWindow {
        TimeWindow::new(start, end).unwrap()
    }

    fn periods(segments: &[ShiftSegment]) -> Vec<ShiftPeriod> {
        segments.iter().map(|s| s.period).collect()
    }

    // ==========================================================================
    // PS-001: window inside one band
    // ==========================================================================
    #[test]
    fn test_ps_001_single_band() {
        let segments = segment_window(&window(7 * 60, 11 * 60), &ShiftRules::default(), &[]);
        assert_eq!(periods(&segments), vec![ShiftPeriod::Manha]);
        assert_eq!(segments[0].total_minutes, 240);
        assert!(!segments[0].has_extra);
    }

    // ==========================================================================
    // PS-002: window spanning three bands
    // ==========================================================================
    #[test]
    fn test_ps_002_day_window_spans_bands() {
        // 09:00-20:00 => manha 240, tarde 300, noite 120
        let segments = segment_window(&window(9 * 60, 20 * 60), &ShiftRules::default(), &[]);
        assert_eq!(
            periods(&segments),
            vec![ShiftPeriod::Manha, ShiftPeriod::Tarde, ShiftPeriod::Noite]
        );
        let minutes: Vec<u32> = segments.iter().map(|s| s.total_minutes).collect();
        assert_eq!(minutes, vec![240, 300, 120]);
    }

    // ==========================================================================
    // PS-003: overnight window splits at midnight
    // ==========================================================================
    #[test]
    fn test_ps_003_overnight_noite_then_madrugada() {
        let segments = segment_window(&window(23 * 60, 2 * 60), &ShiftRules::default(), &[]);
        assert_eq!(
            periods(&segments),
            vec![ShiftPeriod::Noite, ShiftPeriod::Madrugada]
        );
        assert_eq!(segments[0].total_minutes + segments[1].total_minutes, 180);
    }

    // ==========================================================================
    // PS-004: period touched twice is merged
    // ==========================================================================
    #[test]
    fn test_ps_004_wraparound_merges_repeated_period() {
        // 05:00-05:00 covers the full day; madrugada touched at both ends
        let segments = segment_window(&window(5 * 60, 5 * 60), &ShiftRules::default(), &[]);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].period, ShiftPeriod::Madrugada);
        assert_eq!(segments[0].total_minutes, 6 * 60);
        let total: u32 = segments.iter().map(|s| s.total_minutes).sum();
        assert_eq!(total, MINUTES_PER_DAY);
    }

    #[test]
    fn test_window_ending_at_midnight() {
        let segments = segment_window(&window(20 * 60, 0), &ShiftRules::default(), &[]);
        assert_eq!(periods(&segments), vec![ShiftPeriod::Noite]);
        assert_eq!(segments[0].total_minutes, 240);
    }

    #[test]
    fn test_extra_periods_are_flagged() {
        let segments = segment_window(
            &window(17 * 60, 19 * 60),
            &ShiftRules::default(),
            &[ShiftPeriod::Noite],
        );
        assert!(!segments[0].has_extra);
        assert!(segments[1].has_extra);
    }

    #[test]
    fn test_night_minutes_daytime_is_zero() {
        assert_eq!(night_minutes(&window(8 * 60, 17 * 60), &ShiftRules::default()), 0);
    }

    #[test]
    fn test_night_minutes_overnight() {
        // 23:00-02:00 is entirely night
        assert_eq!(night_minutes(&window(23 * 60, 2 * 60), &ShiftRules::default()), 180);
    }

    #[test]
    fn test_night_minutes_early_morning() {
        // 04:00-09:00 earns 04:00-06:00
        assert_eq!(night_minutes(&window(4 * 60, 9 * 60), &ShiftRules::default()), 120);
    }

    #[test]
    fn test_night_minutes_non_wrapping_interval() {
        let rules = ShiftRules {
            night_start_minute: 60,
            night_end_minute: 300,
            ..ShiftRules::default()
        };
        assert_eq!(night_minutes(&window(0, 2 * 60), &rules), 60);
    }

    proptest! {
        #[test]
        fn prop_segments_partition_window(start in 0u32..1440, end in 0u32..1440) {
            let w = window(start, end);
            let segments = segment_window(&w, &ShiftRules::default(), &[]);
            let total: u32 = segments.iter().map(|s| s.total_minutes).sum();
            prop_assert_eq!(total, w.duration_minutes());
            prop_assert!(segments.iter().all(|s| s.total_minutes > 0));
        }

        #[test]
        fn prop_night_minutes_bounded(start in 0u32..1440, end in 0u32..1440) {
            let w = window(start, end);
            prop_assert!(night_minutes(&w, &ShiftRules::default()) <= w.duration_minutes());
        }
    }
}
