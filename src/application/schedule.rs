//! Resolves an arena and schedules the match.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{Arena, BearerToken, Match, NewMatch, SchedulePolicy, TeamId};
use crate::error::{Error, Result};
use crate::port::outbound::game::GameService;
use crate::port::outbound::system::Clock;

pub struct MatchScheduler {
    games: Arc<dyn GameService>,
    clock: Arc<dyn Clock>,
    policy: SchedulePolicy,
}

impl MatchScheduler {
    pub fn new(games: Arc<dyn GameService>, clock: Arc<dyn Clock>, policy: SchedulePolicy) -> Self {
        Self {
            games,
            clock,
            policy,
        }
    }

    /// First arena by name.
    pub async fn resolve_arena(&self, auth: &BearerToken) -> Result<Arena> {
        let arena = self
            .games
            .fetch_arenas(auth)
            .await?
            .into_iter()
            .next()
            .ok_or(Error::EmptyResultSet { resource: "arenas" })?;

        info!(arena_id = %arena.guid, name = %arena.label(), "Fetched arena");
        Ok(arena)
    }

    /// Schedule a match between `home` and `away` starting per the policy.
    pub async fn schedule(
        &self,
        auth: &BearerToken,
        arena: &Arena,
        home: TeamId,
        away: TeamId,
    ) -> Result<Match> {
        let now = self.clock.now();
        let start_at = self
            .policy
            .start_at(now)
            .ok_or(Error::StartOutOfRange { now })?;
        let request = NewMatch {
            arena_uid: arena.guid,
            start_at,
            home_team_uid: home,
            away_team_uid: away,
        };

        let created = self.games.create_match(auth, &request).await?;
        if created.state().is_finalized() {
            warn!(match_id = %created.guid, "Match already carries a result at creation");
        }

        info!(
            match_id = %created.guid,
            home = %home,
            away = %away,
            arena_id = %arena.guid,
            start_at = %request.start_at,
            "Created match"
        );
        Ok(created)
    }
}
