//! Request types for the shift engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::ClassifyOptions;
use crate::models::{HolidayCalendar, PriceContext, ShiftPeriod};

/// Request body for the `/schedule` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The schedule text, e.g. `"10/09 das 23 às 02"`.
    pub text: String,
    /// Anchors dates written without a year. Defaults to today.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Holidays added to the configured calendar for this request.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// Stated break flag; omit to let the engine infer it.
    #[serde(default)]
    pub explicit_break: Option<bool>,
    /// Whether the whole schedule is overtime.
    #[serde(default)]
    pub has_extra_global: bool,
    /// Periods the caller flags as overtime.
    #[serde(default)]
    pub extra_periods: Vec<ShiftPeriod>,
    /// Number of workers requested per day.
    #[serde(default = "default_collaborators")]
    pub collaborators_per_day: u32,
}

fn default_collaborators() -> u32 {
    1
}

impl ScheduleRequest {
    /// Builds the classifier options carried by this request.
    pub fn options(&self) -> ClassifyOptions {
        ClassifyOptions {
            explicit_break: self.explicit_break,
            has_extra_global: self.has_extra_global,
            extra_periods: self.extra_periods.clone(),
            collaborators_per_day: self.collaborators_per_day,
        }
    }
}

/// Request body for the `/prices/breakdown` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBreakdownRequest {
    /// The catalog key of the role.
    pub role_key: String,
    /// The period to price.
    pub period: ShiftPeriod,
    /// The date to price.
    pub date: NaiveDate,
    /// Whether the schedule carries global overtime.
    #[serde(default)]
    pub has_extra_global: bool,
    /// Whether madrugada overtime stacking may apply.
    #[serde(default = "default_true")]
    pub consider_extra_multiplier: bool,
    /// Holidays added to the configured calendar for this request.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
}

fn default_true() -> bool {
    true
}

impl PriceBreakdownRequest {
    /// Builds the pricing context for this request.
    pub fn context(&self) -> PriceContext {
        PriceContext::new(self.role_key.clone(), self.period, self.date)
            .with_extra_global(self.has_extra_global)
            .with_extra_multiplier(self.consider_extra_multiplier)
    }
}

/// Request body for the `/prices/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPriceRequest {
    /// The catalog key of the role.
    pub role_key: String,
    /// Dates to price.
    pub dates: Vec<NaiveDate>,
    /// Periods to price on each date.
    pub periods: Vec<ShiftPeriod>,
    /// Holidays added to the configured calendar for this request.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// Whether the schedule carries global overtime.
    #[serde(default)]
    pub has_extra_global: bool,
}

/// Merges request holidays into the configured calendar.
pub(crate) fn merged_calendar(configured: &HolidayCalendar, extra: &[NaiveDate]) -> HolidayCalendar {
    if extra.is_empty() {
        return configured.clone();
    }
    configured.merged_with(&HolidayCalendar::from_dates(extra.iter().copied()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_request_defaults() {
        let request: ScheduleRequest =
            serde_json::from_str(r#"{"text": "10/09 das 23 às 02"}"#).unwrap();
        assert!(request.reference_date.is_none());
        assert!(request.holidays.is_empty());
        assert_eq!(request.options(), ClassifyOptions::default());
    }

    #[test]
    fn test_breakdown_request_context() {
        let request: PriceBreakdownRequest = serde_json::from_str(
            r#"{"role_key": "garcom", "period": "madrugada", "date": "2025-07-10", "has_extra_global": true}"#,
        )
        .unwrap();
        let ctx = request.context();
        assert!(ctx.has_extra_global);
        assert!(ctx.consider_extra_multiplier);
        assert_eq!(ctx.period, ShiftPeriod::Madrugada);
    }

    #[test]
    fn test_merged_calendar_adds_request_holidays() {
        let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        let extra = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
        let calendar = merged_calendar(&HolidayCalendar::from_dates([christmas]), &[extra]);
        assert!(calendar.is_holiday(christmas));
        assert!(calendar.is_holiday(extra));
    }
}
