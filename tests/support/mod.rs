#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use matchday::application::{FriendlyMatchScenario, ScenarioServices, ScenarioSettings};
use matchday::domain::BearerToken;
use matchday::testkit::system::{FixedClock, SequentialIds};
use tokio::sync::watch;

use crate::harness::scripted_backend::ScriptedBackend;

pub const TOKEN: &str = "test-token";

pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// 2026-10-19 10:00:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap()
}

pub fn token() -> BearerToken {
    BearerToken::from_raw(Some(TOKEN.to_string())).unwrap()
}

/// Wire every port to the same scripted backend.
pub fn services(backend: &Arc<ScriptedBackend>) -> ScenarioServices {
    ScenarioServices {
        roster: backend.clone(),
        teams: backend.clone(),
        games: backend.clone(),
        ids: Arc::new(SequentialIds::default()),
        clock: Arc::new(FixedClock(now())),
    }
}

pub fn settings() -> ScenarioSettings {
    ScenarioSettings {
        poll_interval: POLL_INTERVAL,
        ..ScenarioSettings::default()
    }
}

/// Scenario with a credential and a shutdown channel nobody triggers.
pub fn scenario(backend: &Arc<ScriptedBackend>) -> (FriendlyMatchScenario, watch::Sender<bool>) {
    scenario_with(backend, Some(token()))
}

pub fn scenario_with(
    backend: &Arc<ScriptedBackend>,
    credential: Option<BearerToken>,
) -> (FriendlyMatchScenario, watch::Sender<bool>) {
    let (tx, rx) = watch::channel(false);
    let scenario = FriendlyMatchScenario::new(&services(backend), &settings(), credential, rx);
    (scenario, tx)
}
