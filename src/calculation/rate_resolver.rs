//! Rate resolution.
//!
//! This module prices one role for one date and period by walking a fixed
//! precedence of sources: the exact matrix cell, the weekday matrix cell,
//! then the catalog base price scaled by multipliers. Overtime in the
//! madrugada period stacks two further multipliers on whichever tier fired.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, trace};

use crate::config::{
    DEFAULT_EXTRA_ON_MULTIPLIER, DEFAULT_MADRUGADA_EXTRA_MULTIPLIER, PriceMultipliers,
    PricingConfig,
};
use crate::models::{
    BatchPrice, HolidayCalendar, PriceBreakdown, PriceContext, ResolutionTier, ShiftPeriod,
};

use super::day_detection::{DayType, get_day_type};

/// Reason reported when a role has no usable base price.
pub const NO_BASE_PRICE_REASON: &str = "no_base_price";

/// Prices roles against an immutable pricing snapshot.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::RateResolver;
/// use shift_engine::config::PricingConfig;
/// use shift_engine::models::{HolidayCalendar, PriceContext, ShiftPeriod};
/// use chrono::NaiveDate;
///
/// let pricing: PricingConfig = serde_json::from_str(r#"{
///     "catalog_roles": [{"key": "garcom", "basePrice": 100}],
///     "role_rates": {"garcom": {"weekday": {"manha": 110}}}
/// }"#).unwrap();
/// let resolver = RateResolver::new(&pricing);
///
/// // 2025-07-10 is a Thursday
/// let ctx = PriceContext::new("garcom", ShiftPeriod::Manha, NaiveDate::from_ymd_opt(2025, 7, 10).unwrap());
/// assert_eq!(resolver.price_for(&ctx, &HolidayCalendar::new()), 110);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RateResolver<'a> {
    pricing: &'a PricingConfig,
}

impl<'a> RateResolver<'a> {
    /// Creates a resolver over a pricing snapshot.
    pub fn new(pricing: &'a PricingConfig) -> Self {
        Self { pricing }
    }

    /// Returns the final price for a context.
    ///
    /// Equal to `price_breakdown(ctx, holidays).final_price`.
    pub fn price_for(&self, ctx: &PriceContext, holidays: &HolidayCalendar) -> i64 {
        self.price_breakdown(ctx, holidays).final_price
    }

    /// Resolves a price and reports how it was reached.
    ///
    /// An unknown role or a zero base price yields tier
    /// [`ResolutionTier::None`], a final price of `0` and reason
    /// `"no_base_price"`, before any matrix lookup.
    pub fn price_breakdown(&self, ctx: &PriceContext, holidays: &HolidayCalendar) -> PriceBreakdown {
        let day_type = get_day_type(ctx.date, holidays);
        let base_price = self.pricing.base_price(&ctx.role_key);

        let mut breakdown = PriceBreakdown {
            role_key: ctx.role_key.clone(),
            date: ctx.date,
            period: ctx.period,
            day_type,
            tier: ResolutionTier::None,
            base_price,
            matrix_value: None,
            weekday_fallback_value: None,
            period_multiplier: Decimal::ONE,
            day_type_multiplier: Decimal::ONE,
            madrugada_extra_multiplier: Decimal::ONE,
            extra_global_multiplier: Decimal::ONE,
            unrounded: Decimal::ZERO,
            final_price: 0,
            path: Vec::new(),
            reason: None,
        };

        if base_price <= Decimal::ZERO {
            debug!(role = %ctx.role_key, "No base price for role, pricing as zero");
            breakdown.path.push(ResolutionTier::None);
            breakdown.reason = Some(NO_BASE_PRICE_REASON.to_string());
            return breakdown;
        }

        let matrix = &self.pricing.role_rates;
        let mut value = None;

        breakdown.path.push(ResolutionTier::Matrix);
        if let Some(cell) = matrix.lookup(&ctx.role_key, day_type, ctx.period) {
            breakdown.tier = ResolutionTier::Matrix;
            breakdown.matrix_value = Some(cell);
            value = Some(cell);
        }

        if value.is_none() && day_type != DayType::Weekday {
            breakdown.path.push(ResolutionTier::WeekdayFallback);
            if let Some(cell) = matrix.lookup(&ctx.role_key, DayType::Weekday, ctx.period) {
                breakdown.tier = ResolutionTier::WeekdayFallback;
                breakdown.weekday_fallback_value = Some(cell);
                value = Some(cell);
            }
        }

        let mut value = match value {
            Some(cell) => cell,
            None => {
                let (tier, mults) = match &self.pricing.price_multipliers {
                    Some(configured) => (ResolutionTier::ConfigFallback, configured.clone()),
                    None => (ResolutionTier::Heuristic, PriceMultipliers::default()),
                };
                breakdown.path.push(tier);
                breakdown.tier = tier;
                breakdown.period_multiplier = mults.period_multiplier(ctx.period);
                breakdown.day_type_multiplier = mults.day_type_multiplier(day_type);
                base_price * breakdown.period_multiplier * breakdown.day_type_multiplier
            }
        };

        if ctx.has_extra_global && ctx.period == ShiftPeriod::Madrugada && ctx.consider_extra_multiplier
        {
            let (madrugada_extra, extra_on) = self.overtime_multipliers();
            breakdown.madrugada_extra_multiplier = madrugada_extra;
            breakdown.extra_global_multiplier = extra_on;
            value = value * madrugada_extra * extra_on;
            trace!(role = %ctx.role_key, "Stacked madrugada overtime multipliers");
        }

        breakdown.unrounded = value;
        breakdown.final_price = round_price(value);

        debug!(
            role = %ctx.role_key,
            date = %ctx.date,
            period = %ctx.period,
            day_type = %day_type,
            tier = %breakdown.tier,
            price = breakdown.final_price,
            "Resolved price"
        );

        breakdown
    }

    /// Prices the full cross product of `dates` and `periods`.
    ///
    /// Entries are ordered by date, then by the order of `periods`.
    pub fn batch_prices(
        &self,
        role_key: &str,
        dates: &[NaiveDate],
        periods: &[ShiftPeriod],
        holidays: &HolidayCalendar,
        has_extra_global: bool,
    ) -> Vec<BatchPrice> {
        dates
            .iter()
            .flat_map(|&date| {
                periods.iter().map(move |&period| {
                    let ctx = PriceContext::new(role_key, period, date)
                        .with_extra_global(has_extra_global);
                    BatchPrice {
                        date,
                        period,
                        price: self.price_for(&ctx, holidays),
                    }
                })
            })
            .collect()
    }

    fn overtime_multipliers(&self) -> (Decimal, Decimal) {
        match &self.pricing.price_multipliers {
            Some(mults) => (mults.madrugada_extra_multiplier(), mults.extra_on_multiplier()),
            None => (DEFAULT_MADRUGADA_EXTRA_MULTIPLIER, DEFAULT_EXTRA_ON_MULTIPLIER),
        }
    }
}

/// Rounds half-up to whole currency units. Non-positive values price as zero.
fn round_price(value: Decimal) -> i64 {
    if value <= Decimal::ZERO {
        return 0;
    }
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX)
}
