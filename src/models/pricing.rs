//! Pricing request and result models.
//!
//! This module contains the [`PriceContext`] handed to the rate resolver and
//! the [`PriceBreakdown`] it returns for reconciliation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ShiftPeriod;
use crate::calculation::DayType;

/// What to price: one role, on one date, in one period.
///
/// # Example
///
/// ```
/// use shift_engine::models::{PriceContext, ShiftPeriod};
/// use chrono::NaiveDate;
///
/// let ctx = PriceContext::new("garcom", ShiftPeriod::Manha, NaiveDate::from_ymd_opt(2025, 7, 10).unwrap());
/// assert!(!ctx.has_extra_global);
/// assert!(ctx.consider_extra_multiplier);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceContext {
    /// The catalog key of the role (e.g., "garcom").
    pub role_key: String,
    /// The period being priced.
    pub period: ShiftPeriod,
    /// The date being priced.
    pub date: NaiveDate,
    /// Whether the overall schedule was determined to include overtime.
    #[serde(default)]
    pub has_extra_global: bool,
    /// Whether madrugada overtime stacking may be applied.
    #[serde(default = "default_true")]
    pub consider_extra_multiplier: bool,
}

fn default_true() -> bool {
    true
}

impl PriceContext {
    /// Creates a context with no overtime flag and stacking allowed.
    pub fn new(role_key: impl Into<String>, period: ShiftPeriod, date: NaiveDate) -> Self {
        Self {
            role_key: role_key.into(),
            period,
            date,
            has_extra_global: false,
            consider_extra_multiplier: true,
        }
    }

    /// Sets the global overtime flag.
    pub fn with_extra_global(mut self, has_extra_global: bool) -> Self {
        self.has_extra_global = has_extra_global;
        self
    }

    /// Sets whether madrugada overtime stacking may be applied.
    pub fn with_extra_multiplier(mut self, consider: bool) -> Self {
        self.consider_extra_multiplier = consider;
        self
    }
}

/// The resolution tier that produced a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolutionTier {
    /// Exact matrix entry for the date's day type and the period.
    Matrix,
    /// Matrix entry for weekdays and the period.
    WeekdayFallback,
    /// Base price times configured multipliers.
    ConfigFallback,
    /// Base price times built-in multipliers, no multiplier config loaded.
    Heuristic,
    /// No price could be resolved.
    None,
}

impl std::fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionTier::Matrix => write!(f, "matrix"),
            ResolutionTier::WeekdayFallback => write!(f, "weekdayFallback"),
            ResolutionTier::ConfigFallback => write!(f, "configFallback"),
            ResolutionTier::Heuristic => write!(f, "heuristic"),
            ResolutionTier::None => write!(f, "none"),
        }
    }
}

/// Every input and multiplier that went into a price.
///
/// Multipliers not applied on the path taken are reported as `1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// The role that was priced.
    pub role_key: String,
    /// The date that was priced.
    pub date: NaiveDate,
    /// The period that was priced.
    pub period: ShiftPeriod,
    /// The day type the date resolved to.
    pub day_type: DayType,
    /// The tier that produced the value.
    pub tier: ResolutionTier,
    /// The role's catalog base price (zero when the role is unknown).
    pub base_price: Decimal,
    /// The exact matrix entry, when that tier fired.
    pub matrix_value: Option<Decimal>,
    /// The weekday matrix entry, when that tier fired.
    pub weekday_fallback_value: Option<Decimal>,
    /// Period multiplier applied to the base price.
    pub period_multiplier: Decimal,
    /// Day-type multiplier applied to the base price.
    pub day_type_multiplier: Decimal,
    /// Madrugada overtime multiplier.
    pub madrugada_extra_multiplier: Decimal,
    /// Global overtime multiplier.
    pub extra_global_multiplier: Decimal,
    /// The value before rounding.
    pub unrounded: Decimal,
    /// The final price in whole currency units.
    pub final_price: i64,
    /// Tiers visited, in order.
    pub path: Vec<ResolutionTier>,
    /// Why resolution stopped early, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One entry of a batch pricing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPrice {
    /// The date priced.
    pub date: NaiveDate,
    /// The period priced.
    pub period: ShiftPeriod,
    /// The price in whole currency units.
    pub price: i64,
}
