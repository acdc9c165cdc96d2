//! Friendly match showcase: the end-to-end journey across all three
//! services.
//!
//! The steps are strictly sequential and each feeds the next:
//!
//! ```text
//! roster ×2 → team ×2 → budget ×2 → arena → match → poll → budget read ×2
//! ```
//!
//! Every resource created along the way is owned by the server. A failed
//! step aborts the run and leaves whatever was created behind.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::watch;
use tracing::{info, warn};

use super::ledger::BudgetLedger;
use super::poller::{ResultPoller, DEFAULT_POLL_INTERVAL};
use super::schedule::MatchScheduler;
use super::team::TeamBuilder;
use crate::domain::{
    BearerToken, CharacteristicType, SchedulePolicy, ScenarioReport, TeamLedger,
    DEFAULT_INITIAL_BUDGET,
};
use crate::error::{Error, Result};
use crate::port::inbound::scenario::{Iteration, IterationOutcome, ScenarioTask};
use crate::port::outbound::game::GameService;
use crate::port::outbound::roster::RosterService;
use crate::port::outbound::system::{Clock, IdGenerator};
use crate::port::outbound::team::TeamService;

/// Roster page (and label index) of the home side.
const HOME_SIDE: u32 = 0;
/// Roster page (and label index) of the away side.
const AWAY_SIDE: u32 = 1;

/// Port implementations a scenario is assembled from.
///
/// Cloning is cheap; every virtual user gets its own scenario built from
/// the same services.
#[derive(Clone)]
pub struct ScenarioServices {
    pub roster: Arc<dyn RosterService>,
    pub teams: Arc<dyn TeamService>,
    pub games: Arc<dyn GameService>,
    pub ids: Arc<dyn IdGenerator>,
    pub clock: Arc<dyn Clock>,
}

/// Tunables for a run.
#[derive(Debug, Clone)]
pub struct ScenarioSettings {
    pub initial_budget: Decimal,
    pub characteristic: CharacteristicType,
    pub poll_interval: Duration,
    pub schedule: SchedulePolicy,
}

impl Default for ScenarioSettings {
    fn default() -> Self {
        Self {
            initial_budget: Decimal::from(DEFAULT_INITIAL_BUDGET),
            characteristic: CharacteristicType::default(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            schedule: SchedulePolicy::default(),
        }
    }
}

pub struct FriendlyMatchScenario {
    credential: Option<BearerToken>,
    teams: TeamBuilder,
    ledger: BudgetLedger,
    scheduler: MatchScheduler,
    poller: ResultPoller,
}

impl FriendlyMatchScenario {
    /// Assemble a scenario. The credential is fixed for the scenario's life.
    pub fn new(
        services: &ScenarioServices,
        settings: &ScenarioSettings,
        credential: Option<BearerToken>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            credential,
            teams: TeamBuilder::new(
                Arc::clone(&services.roster),
                Arc::clone(&services.teams),
                Arc::clone(&services.ids),
                settings.characteristic,
            ),
            ledger: BudgetLedger::new(Arc::clone(&services.teams), settings.initial_budget),
            scheduler: MatchScheduler::new(
                Arc::clone(&services.games),
                Arc::clone(&services.clock),
                settings.schedule,
            ),
            poller: ResultPoller::new(
                Arc::clone(&services.games),
                settings.poll_interval,
                shutdown,
            ),
        }
    }

    /// Run the whole journey once.
    ///
    /// Without a credential nothing is called and
    /// [`Error::MissingCredential`] is returned.
    pub async fn run(&self) -> Result<ScenarioReport> {
        let Some(auth) = self.credential.as_ref() else {
            return Err(Error::MissingCredential);
        };

        info!("Friendly match showcase started");

        let home_team = self.teams.build(auth, HOME_SIDE).await?;
        let away_team = self.teams.build(auth, AWAY_SIDE).await?;

        let home_before = self.ledger.open(auth, home_team.guid).await?;
        let away_before = self.ledger.open(auth, away_team.guid).await?;
        info!(
            home = %home_before.amount,
            away = %away_before.amount,
            "Budgets before the match"
        );

        let arena = self.scheduler.resolve_arena(auth).await?;
        let fixture = self
            .scheduler
            .schedule(auth, &arena, home_team.guid, away_team.guid)
            .await?;

        let score = self.poller.await_result(auth, fixture.guid).await?;

        let home_after = self.ledger.read(auth, &home_before).await?;
        let away_after = self.ledger.read(auth, &away_before).await?;

        let report = ScenarioReport {
            home: TeamLedger {
                team: home_team,
                before: home_before,
                after: home_after,
            },
            away: TeamLedger {
                team: away_team,
                before: away_before,
                after: away_after,
            },
            arena: arena.guid,
            match_id: fixture.guid,
            score,
            outcome: score.outcome(),
        };

        info!(
            match_id = %report.match_id,
            score = %report.score,
            outcome = %report.outcome,
            home_delta = %report.home.delta(),
            away_delta = %report.away.delta(),
            "Friendly match showcase ended"
        );
        Ok(report)
    }
}

#[async_trait]
impl ScenarioTask for FriendlyMatchScenario {
    fn name(&self) -> &'static str {
        "friendly-match"
    }

    /// Single-shot: whatever happened, this user is done afterwards.
    async fn iterate(&self) -> IterationOutcome {
        let result = self.run().await;
        if let Err(Error::MissingCredential) = &result {
            warn!("No OAuth2 token supplied, skipping friendly match");
        }
        IterationOutcome {
            result,
            next: Iteration::Stop,
        }
    }
}
