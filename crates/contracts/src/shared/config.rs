//! Booking form configuration
//!
//! The configuration is embedded into the bundle as TOML and parsed once on
//! first access. It carries the defaults of a fresh form, logo limits,
//! locale settings and plan pricing.

use crate::enums::Plan;
use crate::shared::i18n::Locale;
use crate::shared::time_of_day::{TimeOfDay, TimeParseError};
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub form: FormConfig,
    pub logo: LogoConfig,
    pub locale: LocaleConfig,
    pub plans: Vec<PlanConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FormConfig {
    pub default_start: String,
    pub default_end: String,
    pub working_days: Vec<WorkingDayConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WorkingDayConfig {
    pub id: String,
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogoConfig {
    pub max_bytes: u64,
    pub accepted_types: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocaleConfig {
    pub default: Locale,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanConfig {
    pub plan: Plan,
    pub monthly_price: u32,
    pub currency: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse booking config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid default time '{value}': {source}")]
    InvalidTime {
        value: String,
        #[source]
        source: TimeParseError,
    },
    #[error("booking config defines no working days")]
    NoWorkingDays,
    #[error("no price configured for plan '{0}'")]
    MissingPlan(&'static str),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[form]
default_start = "09:00 AM"
default_end = "05:00 PM"

[[form.working_days]]
id = "monday"
label = "Monday"
enabled = true

[[form.working_days]]
id = "tuesday"
label = "Tuesday"
enabled = true

[[form.working_days]]
id = "wednesday"
label = "Wednesday"
enabled = true

[[form.working_days]]
id = "thursday"
label = "Thursday"
enabled = true

[[form.working_days]]
id = "friday"
label = "Friday"
enabled = true

[[form.working_days]]
id = "saturday"
label = "Saturday"
enabled = false

[[form.working_days]]
id = "sunday"
label = "Sunday"
enabled = false

[logo]
max_bytes = 5242880
accepted_types = ["image/jpeg", "image/jpg", "image/png"]

[locale]
default = "en"

[[plans]]
plan = "basic"
monthly_price = 169
currency = "AED"

[[plans]]
plan = "premium"
monthly_price = 399
currency = "AED"
"#;

impl Config {
    /// Parse and check a TOML document
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        for value in [&self.form.default_start, &self.form.default_end] {
            TimeOfDay::parse(value).map_err(|source| ConfigError::InvalidTime {
                value: value.clone(),
                source,
            })?;
        }
        if self.form.working_days.is_empty() {
            return Err(ConfigError::NoWorkingDays);
        }
        for plan in Plan::all() {
            if self.plan_price(plan).is_none() {
                return Err(ConfigError::MissingPlan(plan.code()));
            }
        }
        Ok(())
    }

    pub fn plan_price(&self, plan: Plan) -> Option<&PlanConfig> {
        self.plans.iter().find(|p| p.plan == plan)
    }
}

/// Load the embedded configuration
pub fn load_config() -> Result<Config, ConfigError> {
    Config::from_toml(DEFAULT_CONFIG)
}

static CONFIG: Lazy<Config> =
    Lazy::new(|| load_config().expect("embedded booking config must be valid"));

/// Shared configuration instance
pub fn config() -> &'static Config {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.form.working_days.len(), 7);
        assert_eq!(config.form.default_start, "09:00 AM");
        assert_eq!(config.logo.max_bytes, 5 * 1024 * 1024);
        assert_eq!(config.locale.default, Locale::En);
        assert_eq!(config.plan_price(Plan::Premium).unwrap().monthly_price, 399);
    }

    #[test]
    fn test_weekend_disabled_by_default() {
        let enabled: Vec<_> = config()
            .form
            .working_days
            .iter()
            .filter(|d| d.enabled)
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(enabled, ["monday", "tuesday", "wednesday", "thursday", "friday"]);
    }

    #[test]
    fn test_invalid_default_time_rejected() {
        let broken = DEFAULT_CONFIG.replace("05:00 PM", "17:00");
        assert!(matches!(
            Config::from_toml(&broken),
            Err(ConfigError::InvalidTime { .. })
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            Config::from_toml("[form"),
            Err(ConfigError::Parse(_))
        ));
    }
}
