//! Shift summary models.
//!
//! This module contains the [`ShiftSummary`] produced by the shift classifier
//! and its parts. The summary is consumed by UI badge components, so its
//! serialized keys follow the dashboard's field names exactly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ShiftPeriod;

/// The portion of a daily window that falls in one shift period.
///
/// # Example
///
/// ```
/// use shift_engine::models::{ShiftPeriod, ShiftSegment};
///
/// let segment = ShiftSegment {
///     period: ShiftPeriod::Noite,
///     total_minutes: 60,
///     has_extra: false,
/// };
/// let json = serde_json::to_value(&segment).unwrap();
/// assert_eq!(json["totalMinutes"], 60);
/// assert_eq!(json["hasExtra"], false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftSegment {
    /// The period this segment belongs to.
    pub period: ShiftPeriod,
    /// Minutes of the daily window that fall within the period.
    pub total_minutes: u32,
    /// Whether the caller flagged this period as overtime.
    pub has_extra: bool,
}

/// Number of days on which each daily period is touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDayCounts {
    /// Days touching the morning bracket.
    pub manha: u32,
    /// Days touching the afternoon bracket.
    pub tarde: u32,
    /// Days touching the evening bracket.
    pub noite: u32,
    /// Days touching the early-hours bracket.
    pub madrugada: u32,
}

impl PeriodDayCounts {
    /// Returns the count for a period. `Extra` is never counted.
    pub fn get(&self, period: ShiftPeriod) -> u32 {
        match period {
            ShiftPeriod::Manha => self.manha,
            ShiftPeriod::Tarde => self.tarde,
            ShiftPeriod::Noite => self.noite,
            ShiftPeriod::Madrugada => self.madrugada,
            ShiftPeriod::Extra => 0,
        }
    }

    pub(crate) fn add(&mut self, period: ShiftPeriod, days: u32) {
        match period {
            ShiftPeriod::Manha => self.manha += days,
            ShiftPeriod::Tarde => self.tarde += days,
            ShiftPeriod::Noite => self.noite += days,
            ShiftPeriod::Madrugada => self.madrugada += days,
            ShiftPeriod::Extra => {}
        }
    }
}

/// Aggregated labor figures for a whole schedule.
///
/// Hours are decimal hours (e.g. `7.5`) and serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSummary {
    /// Number of dates in the schedule.
    #[serde(rename = "quantidadeDias")]
    pub day_count: u32,
    /// Number of distinct periods the daily window touches.
    #[serde(rename = "quantidadeTurnos")]
    pub shift_count: u32,
    /// Paid hours per day, after the break.
    #[serde(rename = "horasPorDia", with = "rust_decimal::serde::float")]
    pub hours_per_day: Decimal,
    /// Paid hours over every date in the schedule.
    #[serde(rename = "horasTotalPeriodo", with = "rust_decimal::serde::float")]
    pub total_hours: Decimal,
    /// Whether a one-hour unpaid break applies.
    #[serde(rename = "temPausa1h")]
    pub has_break: bool,
    /// Whether the break flag was stated by the caller rather than inferred.
    #[serde(rename = "pausaInformada")]
    pub break_stated: bool,
    /// Gross length of the daily window in hours, break included.
    #[serde(rename = "escalaHoras", with = "rust_decimal::serde::float")]
    pub window_hours: Decimal,
    /// Whether overtime applies.
    #[serde(rename = "temHoraExtra")]
    pub has_overtime: bool,
    /// Whether any date falls on a weekend.
    #[serde(rename = "temFimDeSemana")]
    pub has_weekend: bool,
    /// Number of Saturday or Sunday dates that are not holidays.
    #[serde(rename = "diasFimDeSemana")]
    pub weekend_days: u32,
    /// Whether any date is a holiday.
    #[serde(rename = "temFeriado")]
    pub has_holiday: bool,
    /// Number of holiday dates.
    #[serde(rename = "diasFeriado")]
    pub holiday_days: u32,
    /// Whether the window earns the night differential.
    #[serde(rename = "temAdicionalNoturno")]
    pub has_night_differential: bool,
    /// Night-differential hours per day.
    #[serde(rename = "horasNoturnasPorDia", with = "rust_decimal::serde::float")]
    pub night_hours_per_day: Decimal,
    /// Paid hours per day outside the night bracket.
    #[serde(rename = "horasNormaisPorDia", with = "rust_decimal::serde::float")]
    pub normal_hours_per_day: Decimal,
    /// Window start as `HH:MM`.
    #[serde(rename = "janelaInicioStr")]
    pub window_start: String,
    /// Window end as `HH:MM`.
    #[serde(rename = "janelaFimStr")]
    pub window_end: String,
    /// Number of workers requested per day.
    #[serde(rename = "colaboradoresPorDia")]
    pub collaborators_per_day: u32,
    /// Per-period count of days touched.
    #[serde(rename = "tiposTurno")]
    pub period_days: PeriodDayCounts,
    /// One segment per period touched by the daily window.
    #[serde(rename = "perTurno")]
    pub segments: Vec<ShiftSegment>,
}

impl ShiftSummary {
    /// Returns the minutes the daily window spends in a period.
    pub fn minutes_in(&self, period: ShiftPeriod) -> u32 {
        self.segments
            .iter()
            .filter(|s| s.period == period)
            .map(|s| s.total_minutes)
            .sum()
    }

    /// Returns the periods touched, in the order the window reaches them.
    pub fn periods(&self) -> Vec<ShiftPeriod> {
        self.segments.iter().map(|s| s.period).collect()
    }
}
