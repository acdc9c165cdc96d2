//! Fictive teams built from roster players.

use serde::{Deserialize, Serialize};

use super::id::{BudgetId, OwnerId, PlayerId, TeamId};
use super::wire::null_as_default;

/// Primary characteristic a fictive team is built around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacteristicType {
    Collaboration,
    Speed,
    Stamina,
    #[default]
    Strength,
    Shooting,
    Passing,
    PuckControl,
    Defense,
    Checking,
    GoalieSkill,
    Aggression,
}

/// A fictive team as returned by the team service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub guid: TeamId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub owner_id: Option<OwnerId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub player_ids: Vec<PlayerId>,
    #[serde(default)]
    pub characteristic_type: Option<CharacteristicType>,
    /// Budget system the service may already link to this team.
    #[serde(default)]
    pub budget_system_id: Option<BudgetId>,
}

/// Request body for creating a fictive team.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFictiveTeam {
    pub name: String,
    pub player_ids: Vec<PlayerId>,
    pub characteristic_type: CharacteristicType,
    pub owner_id: OwnerId,
}

impl NewFictiveTeam {
    /// Label used for the team at a given scenario side index.
    #[must_use]
    pub fn label(index: u32) -> String {
        format!("Team{index}")
    }
}
