//! Friendly match scenario configuration.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::ScenarioSettings;
use crate::domain::{
    CharacteristicType, SchedulePolicy, DEFAULT_BACKDATE_MINUTES, DEFAULT_INITIAL_BUDGET,
    DEFAULT_UTC_OFFSET_HOURS,
};
use crate::error::ConfigError;

/// Scenario tunables.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// Amount each team's budget system is opened with.
    #[serde(default = "default_initial_budget")]
    pub initial_budget: Decimal,
    /// Primary characteristic of both fictive teams.
    #[serde(default)]
    pub characteristic: CharacteristicType,
    /// Seconds between match result queries.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Fixed UTC offset for match start times, in hours.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
    /// Minutes a new match is backdated by.
    #[serde(default = "default_backdate_minutes")]
    pub backdate_minutes: i64,
    /// Number of concurrent virtual users.
    #[serde(default = "default_users")]
    pub users: usize,
}

fn default_initial_budget() -> Decimal {
    Decimal::from(DEFAULT_INITIAL_BUDGET)
}

const fn default_poll_interval_secs() -> u64 {
    10
}

const fn default_utc_offset_hours() -> i32 {
    DEFAULT_UTC_OFFSET_HOURS
}

const fn default_backdate_minutes() -> i64 {
    DEFAULT_BACKDATE_MINUTES
}

const fn default_users() -> usize {
    1
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            initial_budget: default_initial_budget(),
            characteristic: CharacteristicType::default(),
            poll_interval_secs: default_poll_interval_secs(),
            utc_offset_hours: default_utc_offset_hours(),
            backdate_minutes: default_backdate_minutes(),
            users: default_users(),
        }
    }
}

impl ScenarioConfig {
    /// Start-time policy described by this config.
    pub fn schedule_policy(&self) -> Result<SchedulePolicy, ConfigError> {
        SchedulePolicy::new(self.utc_offset_hours, self.backdate_minutes).ok_or_else(|| {
            ConfigError::InvalidValue {
                field: "utc_offset_hours",
                reason: format!(
                    "offset {}h with backdate {}m is not representable",
                    self.utc_offset_hours, self.backdate_minutes
                ),
            }
        })
    }
}

impl TryFrom<&ScenarioConfig> for ScenarioSettings {
    type Error = ConfigError;

    fn try_from(config: &ScenarioConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            initial_budget: config.initial_budget,
            characteristic: config.characteristic,
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            schedule: config.schedule_policy()?,
        })
    }
}
