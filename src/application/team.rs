//! Builds fictive teams from roster pages.

use std::sync::Arc;

use tracing::info;

use crate::domain::{BearerToken, CharacteristicType, NewFictiveTeam, Team};
use crate::error::{Error, Result};
use crate::port::outbound::roster::RosterService;
use crate::port::outbound::system::IdGenerator;
use crate::port::outbound::team::TeamService;

/// Composes a team from one roster page per side.
pub struct TeamBuilder {
    roster: Arc<dyn RosterService>,
    teams: Arc<dyn TeamService>,
    ids: Arc<dyn IdGenerator>,
    characteristic: CharacteristicType,
}

impl TeamBuilder {
    pub fn new(
        roster: Arc<dyn RosterService>,
        teams: Arc<dyn TeamService>,
        ids: Arc<dyn IdGenerator>,
        characteristic: CharacteristicType,
    ) -> Self {
        Self {
            roster,
            teams,
            ids,
            characteristic,
        }
    }

    /// Build the team for side `index`, using roster page `index`.
    ///
    /// An empty roster page is fatal.
    pub async fn build(&self, auth: &BearerToken, index: u32) -> Result<Team> {
        let player_ids = self.roster.fetch_player_ids(auth, index).await?;
        if player_ids.is_empty() {
            return Err(Error::EmptyResultSet {
                resource: "players",
            });
        }

        let request = NewFictiveTeam {
            name: NewFictiveTeam::label(index),
            player_ids,
            characteristic_type: self.characteristic,
            owner_id: self.ids.owner_id(),
        };

        let team = self.teams.create_fictive_team(auth, &request).await?;
        info!(
            team_id = %team.guid,
            name = %request.name,
            players = request.player_ids.len(),
            "Created fictive team"
        );
        Ok(team)
    }
}
