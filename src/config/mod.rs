//! Configuration loading and management for the shift engine.
//!
//! This module provides functionality to load the rate catalog, price
//! matrix, multipliers, shift rules and holidays, either from YAML files or
//! from an admin-config JSON snapshot.
//!
//! # Example
//!
//! ```no_run
//! use shift_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded {} roles", config.pricing().catalog_roles.len());
//! ```

mod loader;
mod seed;
mod types;

pub use loader::ConfigLoader;
pub use seed::seed_catalog;
pub use types::{
    CatalogRole, DEFAULT_EXTRA_MULTIPLIER, DEFAULT_EXTRA_ON_MULTIPLIER, DEFAULT_HOLIDAY_MULTIPLIER,
    DEFAULT_MADRUGADA_EXTRA_MULTIPLIER, DEFAULT_MADRUGADA_MULTIPLIER, DEFAULT_MANHA_MULTIPLIER,
    DEFAULT_NOITE_MULTIPLIER, DEFAULT_SATURDAY_MULTIPLIER, DEFAULT_SUNDAY_MULTIPLIER,
    DEFAULT_TARDE_MULTIPLIER, DEFAULT_WEEKDAY_MULTIPLIER, DayTypeMultipliers, EngineConfig,
    ExtraMultipliers, PeriodBand, PeriodMultipliers, PeriodRates, PriceMultipliers, PricingConfig,
    RoleRates, RoleRatesMatrix, ShiftRules, default_bands,
};
