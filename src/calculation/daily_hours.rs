//! Daily break and overtime detection.
//!
//! This module turns the gross length of a daily window into paid hours,
//! deciding whether an unpaid break applies and whether the paid day exceeds
//! the standard shift.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ShiftRules;

/// The paid-hours figures for one day of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHours {
    /// Length of the window, break included.
    pub gross_hours: Decimal,
    /// Unpaid break deducted from the window.
    pub break_hours: Decimal,
    /// Hours paid per day (`gross_hours - break_hours`).
    pub paid_hours: Decimal,
    /// Paid hours beyond the standard shift.
    pub overtime_hours: Decimal,
    /// Whether a break applies.
    pub has_break: bool,
    /// Whether the break decision came from the caller.
    pub break_stated: bool,
}

impl DailyHours {
    /// Returns true if the paid day exceeds the standard shift.
    pub fn has_overtime(&self) -> bool {
        self.overtime_hours > Decimal::ZERO
    }
}

/// Converts minutes to hours.
pub fn minutes_to_hours(minutes: u32) -> Decimal {
    Decimal::from(minutes) / Decimal::new(60, 0)
}

/// Computes break and overtime for a daily window.
///
/// When `explicit_break` is `None` a break is inferred for windows strictly
/// longer than `rules.break_threshold_hours`. A stated flag is honored
/// verbatim, even for short windows.
///
/// # Examples
///
/// ## Long window with inferred break
///
/// ```
/// use shift_engine::calculation::compute_daily_hours;
/// use shift_engine::config::ShiftRules;
/// use rust_decimal::Decimal;
///
/// // 09:00-18:00
/// let hours = compute_daily_hours(9 * 60, None, &ShiftRules::default());
///
/// assert!(hours.has_break);
/// assert!(!hours.break_stated);
/// assert_eq!(hours.paid_hours, Decimal::new(8, 0));
/// assert!(!hours.has_overtime());
/// ```
///
/// ## Stated absence of a break
///
/// ```
/// use shift_engine::calculation::compute_daily_hours;
/// use shift_engine::config::ShiftRules;
/// use rust_decimal::Decimal;
///
/// let hours = compute_daily_hours(10 * 60, Some(false), &ShiftRules::default());
///
/// assert!(!hours.has_break);
/// assert!(hours.break_stated);
/// assert_eq!(hours.overtime_hours, Decimal::new(2, 0));
/// ```
pub fn compute_daily_hours(
    duration_minutes: u32,
    explicit_break: Option<bool>,
    rules: &ShiftRules,
) -> DailyHours {
    let gross_hours = minutes_to_hours(duration_minutes);

    let (has_break, break_stated) = match explicit_break {
        Some(stated) => (stated, true),
        None => (gross_hours > rules.break_threshold_hours, false),
    };

    let break_hours = if has_break {
        rules.break_hours.min(gross_hours)
    } else {
        Decimal::ZERO
    };
    let paid_hours = gross_hours - break_hours;

    let overtime_hours = if paid_hours > rules.standard_shift_hours {
        paid_hours - rules.standard_shift_hours
    } else {
        Decimal::ZERO
    };

    DailyHours {
        gross_hours,
        break_hours,
        paid_hours,
        overtime_hours,
        has_break,
        break_stated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // DH-001: exactly 6 hours - no inferred break
    // ==========================================================================
    #[test]
    fn test_dh_001_six_hours_no_break() {
        let hours = compute_daily_hours(6 * 60, None, &ShiftRules::default());
        assert!(!hours.has_break);
        assert_eq!(hours.paid_hours, dec("6"));
    }

    // ==========================================================================
    // DH-002: just over 6 hours - break inferred
    // ==========================================================================
    #[test]
    fn test_dh_002_over_six_hours_infers_break() {
        let hours = compute_daily_hours(6 * 60 + 30, None, &ShiftRules::default());
        assert!(hours.has_break);
        assert_eq!(hours.paid_hours, dec("5.5"));
    }

    // ==========================================================================
    // DH-003: exactly 8 paid hours - no overtime
    // ==========================================================================
    #[test]
    fn test_dh_003_exactly_8_paid_hours_no_overtime() {
        let hours = compute_daily_hours(9 * 60, None, &ShiftRules::default());
        assert_eq!(hours.paid_hours, dec("8"));
        assert_eq!(hours.overtime_hours, Decimal::ZERO);
        assert!(!hours.has_overtime());
    }

    // ==========================================================================
    // DH-004: 10 paid hours - 2 overtime hours
    // ==========================================================================
    #[test]
    fn test_dh_004_overtime_beyond_standard_shift() {
        let hours = compute_daily_hours(11 * 60, None, &ShiftRules::default());
        assert_eq!(hours.paid_hours, dec("10"));
        assert_eq!(hours.overtime_hours, dec("2"));
    }

    // ==========================================================================
    // DH-005: stated break on a short window is honored
    // ==========================================================================
    #[test]
    fn test_dh_005_stated_break_on_short_window() {
        let hours = compute_daily_hours(4 * 60, Some(true), &ShiftRules::default());
        assert!(hours.has_break);
        assert!(hours.break_stated);
        assert_eq!(hours.paid_hours, dec("3"));
    }

    #[test]
    fn test_break_never_exceeds_window() {
        let rules = ShiftRules {
            break_hours: dec("2"),
            ..ShiftRules::default()
        };
        let hours = compute_daily_hours(60, Some(true), &rules);
        assert_eq!(hours.paid_hours, Decimal::ZERO);
    }

    #[test]
    fn test_custom_standard_shift() {
        let rules = ShiftRules {
            standard_shift_hours: dec("10"),
            ..ShiftRules::default()
        };
        let hours = compute_daily_hours(11 * 60, None, &rules);
        assert!(!hours.has_overtime());
    }

    #[test]
    fn test_minutes_to_hours_fraction() {
        assert_eq!(minutes_to_hours(90), dec("1.5"));
        assert_eq!(minutes_to_hours(0), Decimal::ZERO);
    }
}
