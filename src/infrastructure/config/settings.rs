//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! field has a default, so the scenario runs without a config file against
//! the standard docker-compose ports. The OAuth2 token is never read from
//! the config file; it comes from the CLI or the `OAUTH2_TOKEN` variable.
//!
//! # Example
//!
//! ```no_run
//! use matchday::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("matchday.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use super::scenario::ScenarioConfig;
use super::services::ServicesConfig;
use crate::domain::MAX_BACKDATE_MINUTES;
use crate::error::{ConfigError, Result};

/// Largest offset the game service's `OffsetDateTime` accepts.
const MAX_UTC_OFFSET_HOURS: i32 = 18;

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Backend endpoints.
    #[serde(default)]
    pub services: ServicesConfig,

    /// Scenario tunables.
    #[serde(default)]
    pub scenario: ScenarioConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        validate_url("roster_url", &self.services.roster_url)?;
        validate_url("team_url", &self.services.team_url)?;
        validate_url("game_url", &self.services.game_url)?;

        if self.services.roster_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "roster_page_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        let scenario = &self.scenario;
        if scenario.initial_budget < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "initial_budget",
                reason: "must not be negative".to_string(),
            }
            .into());
        }
        if scenario.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if scenario.utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS {
            return Err(ConfigError::InvalidValue {
                field: "utc_offset_hours",
                reason: format!("must be within ±{MAX_UTC_OFFSET_HOURS} hours"),
            }
            .into());
        }
        if !(0..=MAX_BACKDATE_MINUTES).contains(&scenario.backdate_minutes) {
            return Err(ConfigError::InvalidValue {
                field: "backdate_minutes",
                reason: format!("must be between 0 and {MAX_BACKDATE_MINUTES}"),
            }
            .into());
        }
        if scenario.users == 0 {
            return Err(ConfigError::InvalidValue {
                field: "users",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        scenario.schedule_policy()?;

        Ok(())
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[allow(clippy::result_large_err)]
fn validate_url(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    Ok(())
}
