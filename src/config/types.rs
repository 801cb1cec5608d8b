//! Configuration types for shift classification and pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files or from an admin-config
//! JSON snapshot.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayType;
use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayCalendar, Holiday, MINUTES_PER_DAY, ShiftPeriod};

/// A role that can be staffed and priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRole {
    /// Catalog key used in rate matrices (e.g., "garcom").
    pub key: String,
    /// Human-readable name (e.g., "Garçom").
    #[serde(default)]
    pub label: String,
    /// Sector the role belongs to (e.g., "A&B").
    #[serde(default)]
    pub sector: String,
    /// Price of one shift before any multiplier.
    #[serde(rename = "basePrice", default)]
    pub base_price: Decimal,
}

/// Prices per period for a single day type. Any period may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRates {
    /// Price for the madrugada period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub madrugada: Option<Decimal>,
    /// Price for the manha period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manha: Option<Decimal>,
    /// Price for the tarde period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tarde: Option<Decimal>,
    /// Price for the noite period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noite: Option<Decimal>,
    /// Price for the extra period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Decimal>,
}

impl PeriodRates {
    /// Returns the configured price for a period, if any.
    pub fn get(&self, period: ShiftPeriod) -> Option<Decimal> {
        match period {
            ShiftPeriod::Madrugada => self.madrugada,
            ShiftPeriod::Manha => self.manha,
            ShiftPeriod::Tarde => self.tarde,
            ShiftPeriod::Noite => self.noite,
            ShiftPeriod::Extra => self.extra,
        }
    }
}

/// Prices per day type for a single role. Any day type may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRates {
    /// Prices on weekdays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<PeriodRates>,
    /// Prices on saturdays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<PeriodRates>,
    /// Prices on sundays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<PeriodRates>,
    /// Prices on holidays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday: Option<PeriodRates>,
}

impl RoleRates {
    /// Returns the period prices for a day type, if any.
    pub fn for_day(&self, day_type: DayType) -> Option<&PeriodRates> {
        match day_type {
            DayType::Weekday => self.weekday.as_ref(),
            DayType::Saturday => self.saturday.as_ref(),
            DayType::Sunday => self.sunday.as_ref(),
            DayType::Holiday => self.holiday.as_ref(),
        }
    }
}

/// Sparse `role -> day type -> period -> price` matrix.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::DayType;
/// use shift_engine::config::RoleRatesMatrix;
/// use shift_engine::models::ShiftPeriod;
/// use rust_decimal::Decimal;
///
/// let matrix: RoleRatesMatrix =
///     serde_json::from_str(r#"{"garcom": {"weekday": {"manha": 110}}}"#).unwrap();
///
/// assert_eq!(
///     matrix.lookup("garcom", DayType::Weekday, ShiftPeriod::Manha),
///     Some(Decimal::new(110, 0))
/// );
/// assert_eq!(matrix.lookup("garcom", DayType::Sunday, ShiftPeriod::Manha), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleRatesMatrix(pub HashMap<String, RoleRates>);

impl RoleRatesMatrix {
    /// Looks up a single cell of the matrix.
    pub fn lookup(&self, role_key: &str, day_type: DayType, period: ShiftPeriod) -> Option<Decimal> {
        self.0
            .get(role_key)
            .and_then(|rates| rates.for_day(day_type))
            .and_then(|rates| rates.get(period))
    }

    /// Returns true if the matrix has no roles.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Multipliers per period. Absent or zero entries fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodMultipliers {
    /// Multiplier for the madrugada period.
    #[serde(default)]
    pub madrugada: Option<Decimal>,
    /// Multiplier for the manha period.
    #[serde(default)]
    pub manha: Option<Decimal>,
    /// Multiplier for the tarde period.
    #[serde(default)]
    pub tarde: Option<Decimal>,
    /// Multiplier for the noite period.
    #[serde(default)]
    pub noite: Option<Decimal>,
    /// Multiplier for the extra period.
    #[serde(default)]
    pub extra: Option<Decimal>,
}

/// Multipliers per day type.
///
/// `weekend` is used for Saturday and Sunday when the specific entry is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTypeMultipliers {
    /// Multiplier on weekdays.
    #[serde(default)]
    pub weekday: Option<Decimal>,
    /// Multiplier on Saturdays.
    #[serde(default)]
    pub saturday: Option<Decimal>,
    /// Multiplier on Sundays.
    #[serde(default)]
    pub sunday: Option<Decimal>,
    /// Fallback for Saturday and Sunday.
    #[serde(default)]
    pub weekend: Option<Decimal>,
    /// Multiplier on holidays.
    #[serde(default)]
    pub holiday: Option<Decimal>,
}

/// Overtime multipliers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraMultipliers {
    /// Applied when the schedule carries global overtime.
    #[serde(default)]
    pub on: Option<Decimal>,
    /// Applied when it does not.
    #[serde(default)]
    pub off: Option<Decimal>,
}

/// The `price_multipliers` section of the admin configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceMultipliers {
    /// Multipliers per period.
    #[serde(default)]
    pub period: PeriodMultipliers,
    /// Multipliers per day type.
    #[serde(rename = "dayType", default)]
    pub day_type: DayTypeMultipliers,
    /// Overtime multipliers.
    #[serde(default)]
    pub extra: ExtraMultipliers,
    /// Multiplier for overtime worked in the madrugada period.
    #[serde(rename = "madrugadaExtra", default)]
    pub madrugada_extra: Option<Decimal>,
}

/// Default madrugada multiplier.
pub const DEFAULT_MADRUGADA_MULTIPLIER: Decimal = Decimal::from_parts(12, 0, 0, false, 1);
/// Default manhã multiplier.
pub const DEFAULT_MANHA_MULTIPLIER: Decimal = Decimal::from_parts(1, 0, 0, false, 0);
/// Default tarde multiplier.
pub const DEFAULT_TARDE_MULTIPLIER: Decimal = Decimal::from_parts(105, 0, 0, false, 2);
/// Default noite multiplier.
pub const DEFAULT_NOITE_MULTIPLIER: Decimal = Decimal::from_parts(115, 0, 0, false, 2);
/// Default multiplier for the synthetic extra period.
pub const DEFAULT_EXTRA_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default weekday multiplier.
pub const DEFAULT_WEEKDAY_MULTIPLIER: Decimal = Decimal::from_parts(1, 0, 0, false, 0);
/// Default Saturday multiplier, used when neither `saturday` nor `weekend` is set.
pub const DEFAULT_SATURDAY_MULTIPLIER: Decimal = Decimal::from_parts(13, 0, 0, false, 1);
/// Default Sunday multiplier, used when neither `sunday` nor `weekend` is set.
pub const DEFAULT_SUNDAY_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
/// Default holiday multiplier.
pub const DEFAULT_HOLIDAY_MULTIPLIER: Decimal = Decimal::from_parts(17, 0, 0, false, 1);

/// Default global overtime multiplier (`extra.on`).
pub const DEFAULT_EXTRA_ON_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
/// Default madrugada overtime multiplier (`madrugadaExtra`).
pub const DEFAULT_MADRUGADA_EXTRA_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// A configured multiplier counts only when it is present and non-zero.
fn configured(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|m| !m.is_zero())
}

impl PriceMultipliers {
    /// Returns the multiplier for a period, falling back to the built-in table.
    pub fn period_multiplier(&self, period: ShiftPeriod) -> Decimal {
        let (value, default) = match period {
            ShiftPeriod::Madrugada => (self.period.madrugada, DEFAULT_MADRUGADA_MULTIPLIER),
            ShiftPeriod::Manha => (self.period.manha, DEFAULT_MANHA_MULTIPLIER),
            ShiftPeriod::Tarde => (self.period.tarde, DEFAULT_TARDE_MULTIPLIER),
            ShiftPeriod::Noite => (self.period.noite, DEFAULT_NOITE_MULTIPLIER),
            ShiftPeriod::Extra => (self.period.extra, DEFAULT_EXTRA_MULTIPLIER),
        };
        configured(value).unwrap_or(default)
    }

    /// Returns the multiplier for a day type.
    ///
    /// Saturday and Sunday consult their own entry, then `weekend`, then the
    /// built-in default. Holidays never use `weekend`.
    pub fn day_type_multiplier(&self, day_type: DayType) -> Decimal {
        let table = &self.day_type;
        match day_type {
            DayType::Saturday => configured(table.saturday)
                .or(configured(table.weekend))
                .unwrap_or(DEFAULT_SATURDAY_MULTIPLIER),
            DayType::Sunday => configured(table.sunday)
                .or(configured(table.weekend))
                .unwrap_or(DEFAULT_SUNDAY_MULTIPLIER),
            DayType::Holiday => configured(table.holiday).unwrap_or(DEFAULT_HOLIDAY_MULTIPLIER),
            DayType::Weekday => configured(table.weekday).unwrap_or(DEFAULT_WEEKDAY_MULTIPLIER),
        }
    }

    /// Returns the global overtime multiplier.
    pub fn extra_on_multiplier(&self) -> Decimal {
        configured(self.extra.on).unwrap_or(DEFAULT_EXTRA_ON_MULTIPLIER)
    }

    /// Returns the madrugada overtime multiplier.
    pub fn madrugada_extra_multiplier(&self) -> Decimal {
        configured(self.madrugada_extra).unwrap_or(DEFAULT_MADRUGADA_EXTRA_MULTIPLIER)
    }
}

/// The bracket of the day a shift period covers, `[start_minute, end_minute)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBand {
    /// The period this band classifies into.
    pub period: ShiftPeriod,
    /// First minute of the band.
    pub start_minute: u32,
    /// Minute after the last minute of the band (at most 1440).
    pub end_minute: u32,
}

/// Rules for turning a daily window into labor figures.
///
/// # Example
///
/// ```
/// use shift_engine::config::ShiftRules;
/// use shift_engine::models::ShiftPeriod;
///
/// let rules = ShiftRules::default();
/// assert!(rules.validate().is_ok());
/// assert_eq!(rules.band_for(ShiftPeriod::Manha).unwrap().start_minute, 360);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRules {
    /// Standard shift length; longer paid days count as overtime.
    #[serde(default = "default_standard_shift_hours")]
    pub standard_shift_hours: Decimal,
    /// Length of the unpaid break.
    #[serde(default = "default_break_hours")]
    pub break_hours: Decimal,
    /// Windows longer than this get an inferred break.
    #[serde(default = "default_break_threshold_hours")]
    pub break_threshold_hours: Decimal,
    /// Minutes at or after this minute of day earn the night differential.
    #[serde(default = "default_night_start_minute")]
    pub night_start_minute: u32,
    /// Minutes before this minute of day earn the night differential.
    #[serde(default = "default_night_end_minute")]
    pub night_end_minute: u32,
    /// Period boundary table.
    #[serde(default = "default_bands")]
    pub bands: Vec<PeriodBand>,
}

fn default_standard_shift_hours() -> Decimal {
    Decimal::new(8, 0)
}

fn default_break_hours() -> Decimal {
    Decimal::new(1, 0)
}

fn default_break_threshold_hours() -> Decimal {
    Decimal::new(6, 0)
}

fn default_night_start_minute() -> u32 {
    22 * 60
}

fn default_night_end_minute() -> u32 {
    6 * 60
}

/// The canonical boundary table: madrugada 00–06, manhã 06–13, tarde 13–18,
/// noite 18–24.
pub fn default_bands() -> Vec<PeriodBand> {
    vec![
        PeriodBand {
            period: ShiftPeriod::Madrugada,
            start_minute: 0,
            end_minute: 6 * 60,
        },
        PeriodBand {
            period: ShiftPeriod::Manha,
            start_minute: 6 * 60,
            end_minute: 13 * 60,
        },
        PeriodBand {
            period: ShiftPeriod::Tarde,
            start_minute: 13 * 60,
            end_minute: 18 * 60,
        },
        PeriodBand {
            period: ShiftPeriod::Noite,
            start_minute: 18 * 60,
            end_minute: MINUTES_PER_DAY,
        },
    ]
}

impl Default for ShiftRules {
    fn default() -> Self {
        Self {
            standard_shift_hours: default_standard_shift_hours(),
            break_hours: default_break_hours(),
            break_threshold_hours: default_break_threshold_hours(),
            night_start_minute: default_night_start_minute(),
            night_end_minute: default_night_end_minute(),
            bands: default_bands(),
        }
    }
}

impl ShiftRules {
    /// Returns the band configured for a period.
    pub fn band_for(&self, period: ShiftPeriod) -> Option<&PeriodBand> {
        self.bands.iter().find(|b| b.period == period)
    }

    /// Checks that the rules describe a usable day.
    ///
    /// Bands must name a daily period and tile `[0, 1440)` without overlap
    /// or gaps. Night bounds must lie within the day.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| EngineError::ConfigParseError {
            path: "shift_rules".to_string(),
            message,
        };

        if self.bands.is_empty() {
            return Err(invalid("at least one period band is required".to_string()));
        }
        if self.night_start_minute > MINUTES_PER_DAY || self.night_end_minute > MINUTES_PER_DAY {
            return Err(invalid("night bounds must lie within the day".to_string()));
        }
        if self.break_hours.is_sign_negative() || self.standard_shift_hours.is_sign_negative() {
            return Err(invalid("hour settings cannot be negative".to_string()));
        }

        let mut sorted: Vec<&PeriodBand> = self.bands.iter().collect();
        sorted.sort_by_key(|b| b.start_minute);
        for band in &sorted {
            if !band.period.is_daily() {
                return Err(invalid(format!("period '{}' cannot have a band", band.period)));
            }
            if band.start_minute >= band.end_minute || band.end_minute > MINUTES_PER_DAY {
                return Err(invalid(format!(
                    "band for '{}' must satisfy start < end <= 1440",
                    band.period
                )));
            }
        }
        for pair in sorted.windows(2) {
            if pair[1].start_minute < pair[0].end_minute {
                return Err(invalid(format!(
                    "bands '{}' and '{}' overlap",
                    pair[0].period, pair[1].period
                )));
            }
            if pair[1].start_minute > pair[0].end_minute {
                return Err(invalid(format!(
                    "gap between bands '{}' and '{}'",
                    pair[0].period, pair[1].period
                )));
            }
        }
        let covers_day = sorted.first().is_some_and(|b| b.start_minute == 0)
            && sorted.last().is_some_and(|b| b.end_minute == MINUTES_PER_DAY);
        if !covers_day {
            return Err(invalid("bands must cover the whole day".to_string()));
        }
        Ok(())
    }
}

/// Rate configuration snapshot consumed by the rate resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Roles with their base prices.
    #[serde(default)]
    pub catalog_roles: Vec<CatalogRole>,
    /// Sparse price matrix.
    #[serde(default)]
    pub role_rates: RoleRatesMatrix,
    /// Multiplier configuration. `None` selects the built-in heuristic.
    #[serde(default)]
    pub price_multipliers: Option<PriceMultipliers>,
}

impl PricingConfig {
    /// Finds a role by its catalog key.
    pub fn role(&self, key: &str) -> Option<&CatalogRole> {
        self.catalog_roles.iter().find(|r| r.key == key)
    }

    /// Returns the base price of a role, zero when the role is unknown.
    pub fn base_price(&self, key: &str) -> Decimal {
        self.role(key).map(|r| r.base_price).unwrap_or(Decimal::ZERO)
    }
}

/// The complete engine configuration.
///
/// Aggregates pricing, shift rules and the holiday list. Treated as an
/// immutable snapshot once built.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Pricing configuration.
    pricing: PricingConfig,
    /// Shift classification rules.
    shift_rules: ShiftRules,
    /// Configured holidays, sorted by date.
    holidays: Vec<Holiday>,
    /// Holiday dates for lookups.
    calendar: HolidayCalendar,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(pricing: PricingConfig, shift_rules: ShiftRules, holidays: Vec<Holiday>) -> Self {
        let mut sorted_holidays = holidays;
        sorted_holidays.sort_by(|a, b| a.date.cmp(&b.date));
        let calendar = HolidayCalendar::from_holidays(&sorted_holidays);
        Self {
            pricing,
            shift_rules,
            holidays: sorted_holidays,
            calendar,
        }
    }

    /// Returns the pricing configuration.
    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Returns the shift classification rules.
    pub fn shift_rules(&self) -> &ShiftRules {
        &self.shift_rules
    }

    /// Returns the configured holidays.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the configured holiday dates.
    pub fn holiday_calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_multiplier_constants() {
        assert_eq!(DEFAULT_MADRUGADA_MULTIPLIER, d("1.2"));
        assert_eq!(DEFAULT_TARDE_MULTIPLIER, d("1.05"));
        assert_eq!(DEFAULT_NOITE_MULTIPLIER, d("1.15"));
        assert_eq!(DEFAULT_SATURDAY_MULTIPLIER, d("1.3"));
        assert_eq!(DEFAULT_HOLIDAY_MULTIPLIER, d("1.7"));
        assert_eq!(DEFAULT_MADRUGADA_EXTRA_MULTIPLIER, d("1.25"));
    }

    #[test]
    fn test_empty_multipliers_use_defaults() {
        let mults = PriceMultipliers::default();
        assert_eq!(mults.period_multiplier(ShiftPeriod::Manha), d("1"));
        assert_eq!(mults.period_multiplier(ShiftPeriod::Extra), d("1.5"));
        assert_eq!(mults.day_type_multiplier(DayType::Sunday), d("1.5"));
        assert_eq!(mults.day_type_multiplier(DayType::Weekday), d("1"));
        assert_eq!(mults.extra_on_multiplier(), d("1.5"));
        assert_eq!(mults.madrugada_extra_multiplier(), d("1.25"));
    }

    #[test]
    fn test_extra_multipliers_parse_both_keys() {
        let mults: PriceMultipliers =
            serde_json::from_str(r#"{"extra": {"on": 1.6, "off": 1}}"#).unwrap();
        assert_eq!(mults.extra.off, Some(d("1")));
        assert_eq!(mults.extra_on_multiplier(), d("1.6"));
    }

    #[test]
    fn test_weekend_used_for_saturday_and_sunday_only() {
        let mults: PriceMultipliers =
            serde_json::from_str(r#"{"dayType": {"weekend": 1.4}}"#).unwrap();
        assert_eq!(mults.day_type_multiplier(DayType::Saturday), d("1.4"));
        assert_eq!(mults.day_type_multiplier(DayType::Sunday), d("1.4"));
        assert_eq!(mults.day_type_multiplier(DayType::Holiday), d("1.7"));
    }

    #[test]
    fn test_specific_day_entry_beats_weekend() {
        let mults: PriceMultipliers =
            serde_json::from_str(r#"{"dayType": {"weekend": 1.4, "sunday": 2}}"#).unwrap();
        assert_eq!(mults.day_type_multiplier(DayType::Sunday), d("2"));
        assert_eq!(mults.day_type_multiplier(DayType::Saturday), d("1.4"));
    }

    #[test]
    fn test_zero_multiplier_counts_as_absent() {
        let mults: PriceMultipliers =
            serde_json::from_str(r#"{"period": {"noite": 0}, "madrugadaExtra": 0}"#).unwrap();
        assert_eq!(mults.period_multiplier(ShiftPeriod::Noite), d("1.15"));
        assert_eq!(mults.madrugada_extra_multiplier(), d("1.25"));
    }

    #[test]
    fn test_matrix_lookup_is_sparse() {
        let matrix: RoleRatesMatrix = serde_json::from_str(
            r#"{"garcom": {"weekday": {"manha": 110, "madrugada": 150}, "saturday": {"manha": 130}}}"#,
        )
        .unwrap();
        assert_eq!(
            matrix.lookup("garcom", DayType::Saturday, ShiftPeriod::Manha),
            Some(d("130"))
        );
        assert_eq!(
            matrix.lookup("garcom", DayType::Saturday, ShiftPeriod::Madrugada),
            None
        );
        assert_eq!(
            matrix.lookup("cozinheiro", DayType::Weekday, ShiftPeriod::Manha),
            None
        );
    }

    #[test]
    fn test_catalog_role_deserializes_base_price() {
        let role: CatalogRole =
            serde_json::from_str(r#"{"key": "cozinheiro", "basePrice": 120}"#).unwrap();
        assert_eq!(role.base_price, d("120"));
        assert!(role.label.is_empty());
    }

    #[test]
    fn test_base_price_of_unknown_role_is_zero() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.base_price("ghost"), Decimal::ZERO);
    }

    #[test]
    fn test_default_shift_rules_validate() {
        assert!(ShiftRules::default().validate().is_ok());
    }

    #[test]
    fn test_overlapping_bands_rejected() {
        let mut rules = ShiftRules::default();
        rules.bands[1].start_minute = 5 * 60;
        let result = rules.validate();
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("overlap"), "unexpected message: {}", message);
            }
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_bands_with_gap_rejected() {
        let mut rules = ShiftRules::default();
        rules.bands[2].start_minute = 14 * 60;
        let result = rules.validate();
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("gap"), "unexpected message: {}", message);
            }
            _ => panic!("Expected ConfigParseError"),
        }
    }

    #[test]
    fn test_bands_must_reach_midnight() {
        let mut rules = ShiftRules::default();
        rules.bands[3].end_minute = 23 * 60;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_extra_band_rejected() {
        let mut rules = ShiftRules::default();
        rules.bands[0].period = ShiftPeriod::Extra;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_shift_rules_partial_yaml_uses_defaults() {
        let rules: ShiftRules = serde_yaml::from_str("standard_shift_hours: 10\n").unwrap();
        assert_eq!(rules.standard_shift_hours, d("10"));
        assert_eq!(rules.break_threshold_hours, d("6"));
        assert_eq!(rules.bands, default_bands());
    }

    #[test]
    fn test_engine_config_sorts_holidays() {
        let holidays = vec![
            Holiday {
                date: chrono::NaiveDate::from_ymd_opt(2026, 12, 25).unwrap(),
                name: "Natal".to_string(),
            },
            Holiday {
                date: chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                name: "Confraternização Universal".to_string(),
            },
        ];
        let config = EngineConfig::new(PricingConfig::default(), ShiftRules::default(), holidays);
        assert_eq!(config.holidays()[0].name, "Confraternização Universal");
        assert_eq!(config.holiday_calendar().len(), 2);
    }
}
