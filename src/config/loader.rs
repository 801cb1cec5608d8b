//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files or from an admin-config JSON snapshot.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, HolidayCalendar, ShiftPeriod};
use crate::parsing::fold_diacritics;

use super::seed::with_seed_fallback;
use super::types::{
    CatalogRole, EngineConfig, PeriodBand, PriceMultipliers, PricingConfig, RoleRatesMatrix,
    ShiftRules,
};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    catalog_roles: Vec<CatalogRole>,
}

#[derive(Debug, Deserialize)]
struct RoleRatesFile {
    #[serde(default)]
    role_rates: RoleRatesMatrix,
}

#[derive(Debug, Deserialize)]
struct MultipliersFile {
    price_multipliers: PriceMultipliers,
}

#[derive(Debug, Deserialize)]
struct HolidaysFile {
    #[serde(default)]
    holidays: Vec<Holiday>,
}

/// Period band as stored by the admin dashboard, in hours.
#[derive(Debug, Deserialize)]
struct AdminBand {
    nome: String,
    inicio: Decimal,
    fim: Decimal,
}

/// The `regras_turnos` section of the admin configuration.
#[derive(Debug, Deserialize)]
struct AdminShiftRules {
    #[serde(default)]
    horas_base_turno: Option<Decimal>,
    #[serde(default)]
    horas_pausa_obrigatoria: Option<Decimal>,
    #[serde(default)]
    faixas: Vec<AdminBand>,
}

/// The admin-config document as delivered by the settings service.
#[derive(Debug, Deserialize)]
struct AdminConfigSnapshot {
    #[serde(default)]
    catalog_roles: Vec<CatalogRole>,
    #[serde(default)]
    role_rates: RoleRatesMatrix,
    #[serde(default)]
    price_multipliers: Option<PriceMultipliers>,
    #[serde(default)]
    regras_turnos: Option<AdminShiftRules>,
    #[serde(default)]
    holidays: Vec<Holiday>,
}

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── catalog.yaml       # Roles and base prices (required)
/// ├── role_rates.yaml    # Sparse price matrix
/// ├── multipliers.yaml   # Period / day-type / overtime multipliers
/// ├── shift_rules.yaml   # Period bands, break and overtime rules
/// └── holidays.yaml      # Holiday calendar
/// ```
///
/// Only `catalog.yaml` is required. Without `multipliers.yaml` the rate
/// resolver prices through its built-in heuristic; without `shift_rules.yaml`
/// the default rules apply.
///
/// # Example
///
/// ```no_run
/// use shift_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let role = loader.get_role("garcom").unwrap();
/// println!("{}: {}", role.label, role.base_price);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `catalog.yaml` is missing
    /// - Any present file contains invalid YAML
    /// - The shift rules fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let catalog_path = path.join("catalog.yaml");
        let catalog = Self::load_yaml::<CatalogFile>(&catalog_path)?;

        let role_rates = Self::load_optional_yaml::<RoleRatesFile>(&path.join("role_rates.yaml"))?
            .map(|f| f.role_rates)
            .unwrap_or_default();

        let price_multipliers =
            Self::load_optional_yaml::<MultipliersFile>(&path.join("multipliers.yaml"))?
                .map(|f| f.price_multipliers);

        let rules_path = path.join("shift_rules.yaml");
        let shift_rules = Self::load_optional_yaml::<ShiftRules>(&rules_path)?.unwrap_or_default();
        Self::validate_rules(&shift_rules, &rules_path.display().to_string())?;

        let holidays = Self::load_optional_yaml::<HolidaysFile>(&path.join("holidays.yaml"))?
            .map(|f| f.holidays)
            .unwrap_or_default();

        if catalog.catalog_roles.is_empty() {
            warn!(path = %catalog_path.display(), "Catalog lists no roles, using seed catalog");
        }
        if price_multipliers.is_none() {
            debug!(path = %path.display(), "No multiplier config, heuristic pricing applies");
        }

        let pricing = PricingConfig {
            catalog_roles: with_seed_fallback(catalog.catalog_roles),
            role_rates,
            price_multipliers,
        };

        debug!(
            path = %path.display(),
            roles = pricing.catalog_roles.len(),
            holidays = holidays.len(),
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(pricing, shift_rules, holidays),
        })
    }

    /// Builds configuration from an admin-config JSON document.
    ///
    /// Recognized keys are `catalog_roles`, `role_rates`, `price_multipliers`,
    /// `regras_turnos` and `holidays`; anything else is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_admin_json(r#"{
    ///     "catalog_roles": [{"key": "garcom", "basePrice": 100}],
    ///     "role_rates": {"garcom": {"weekday": {"manha": 110}}}
    /// }"#)?;
    /// assert!(loader.get_role("garcom").is_some());
    /// # Ok::<(), shift_engine::error::EngineError>(())
    /// ```
    pub fn from_admin_json(json: &str) -> EngineResult<Self> {
        let snapshot: AdminConfigSnapshot =
            serde_json::from_str(json).map_err(|e| EngineError::ConfigParseError {
                path: "admin_config".to_string(),
                message: e.to_string(),
            })?;

        let shift_rules = match snapshot.regras_turnos {
            Some(admin) => Self::convert_admin_rules(admin)?,
            None => ShiftRules::default(),
        };
        Self::validate_rules(&shift_rules, "admin_config.regras_turnos")?;

        let pricing = PricingConfig {
            catalog_roles: with_seed_fallback(snapshot.catalog_roles),
            role_rates: snapshot.role_rates,
            price_multipliers: snapshot.price_multipliers,
        };

        Ok(Self {
            config: EngineConfig::new(pricing, shift_rules, snapshot.holidays),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads a YAML file if it exists.
    fn load_optional_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_yaml(path).map(Some)
    }

    fn validate_rules(rules: &ShiftRules, source: &str) -> EngineResult<()> {
        rules.validate().map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: source.to_string(),
                message,
            },
            other => other,
        })
    }

    /// Converts the dashboard's hour-based `regras_turnos` into [`ShiftRules`].
    fn convert_admin_rules(admin: AdminShiftRules) -> EngineResult<ShiftRules> {
        let mut rules = ShiftRules::default();
        if let Some(hours) = admin.horas_base_turno.filter(|h| !h.is_zero()) {
            rules.standard_shift_hours = hours;
        }
        if let Some(hours) = admin.horas_pausa_obrigatoria {
            rules.break_hours = hours;
        }
        if admin.faixas.is_empty() {
            return Ok(rules);
        }

        let mut bands = Vec::with_capacity(admin.faixas.len());
        for faixa in &admin.faixas {
            let period = period_from_name(&faixa.nome).ok_or_else(|| EngineError::ConfigParseError {
                path: "admin_config.regras_turnos".to_string(),
                message: format!("unknown period name '{}'", faixa.nome),
            })?;
            bands.push(PeriodBand {
                period,
                start_minute: hours_to_minutes(faixa.inicio)?,
                end_minute: hours_to_minutes(faixa.fim)?,
            });
        }
        rules.bands = bands;
        Ok(rules)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the pricing configuration.
    pub fn pricing(&self) -> &PricingConfig {
        self.config.pricing()
    }

    /// Returns the shift classification rules.
    pub fn shift_rules(&self) -> &ShiftRules {
        self.config.shift_rules()
    }

    /// Returns the configured holiday dates.
    pub fn holiday_calendar(&self) -> &HolidayCalendar {
        self.config.holiday_calendar()
    }

    /// Gets a role by its catalog key.
    pub fn get_role(&self, key: &str) -> Option<&CatalogRole> {
        self.config.pricing().role(key)
    }
}

fn period_from_name(name: &str) -> Option<ShiftPeriod> {
    let folded = fold_diacritics(name);
    ShiftPeriod::DAILY
        .into_iter()
        .find(|period| folded.contains(period.key()))
}

fn hours_to_minutes(hours: Decimal) -> EngineResult<u32> {
    (hours * Decimal::new(60, 0))
        .round()
        .to_u32()
        .ok_or_else(|| EngineError::ConfigParseError {
            path: "admin_config.regras_turnos".to_string(),
            message: format!("band hour {} is out of range", hours),
        })
}
