//! Composition root: wires HTTP clients and system capabilities into
//! scenario instances.

use std::sync::Arc;

use reqwest::Client;
use tokio::sync::watch;
use tracing::info;

use crate::adapter::outbound::http::{ApiClient, GameClient, RosterClient, TeamClient};
use crate::adapter::outbound::system::{RandomIds, SystemClock};
use crate::application::{FriendlyMatchScenario, ScenarioServices, ScenarioSettings};
use crate::domain::BearerToken;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::scenario::ScenarioTask;

/// Build the production services from configuration.
///
/// One `reqwest::Client` backs all three services so virtual users share
/// a single connection pool.
#[must_use]
pub fn build_services(config: &Config) -> ScenarioServices {
    let client = Client::new();
    let services = &config.services;

    info!(
        roster = %services.roster_url,
        team = %services.team_url,
        game = %services.game_url,
        "Service endpoints configured"
    );

    ScenarioServices {
        roster: Arc::new(RosterClient::new(
            ApiClient::new(client.clone(), services.roster_url.clone(), "roster"),
            services.roster_page_size,
        )),
        teams: Arc::new(TeamClient::new(ApiClient::new(
            client.clone(),
            services.team_url.clone(),
            "team",
        ))),
        games: Arc::new(GameClient::new(ApiClient::new(
            client,
            services.game_url.clone(),
            "game",
        ))),
        ids: Arc::new(RandomIds),
        clock: Arc::new(SystemClock),
    }
}

/// Factory producing one friendly match scenario per virtual user.
///
/// # Errors
///
/// Returns an error if the scenario section of the config is invalid.
#[allow(clippy::result_large_err)]
pub fn scenario_factory(
    config: &Config,
    credential: Option<BearerToken>,
    shutdown: watch::Receiver<bool>,
) -> Result<impl Fn(usize) -> Arc<dyn ScenarioTask>> {
    let services = build_services(config);
    let settings = ScenarioSettings::try_from(&config.scenario)?;

    Ok(move |_user: usize| -> Arc<dyn ScenarioTask> {
        Arc::new(FriendlyMatchScenario::new(
            &services,
            &settings,
            credential.clone(),
            shutdown.clone(),
        ))
    })
}
