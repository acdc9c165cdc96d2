//! Matches scheduled on the game service.
//!
//! A match is created pending and the backend attaches a result once its
//! simulation finishes. The scenario never mutates a match, it only
//! observes that single transition.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::id::{ArenaId, MatchId, TeamId};
use super::outcome::Score;

/// Result attached to a finalized match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(default)]
    pub winner_team: Option<TeamId>,
    pub score_home_team: i32,
    pub score_away_team: i32,
}

/// Match as returned by the game service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub guid: MatchId,
    #[serde(default)]
    pub arena: Option<Arena>,
    #[serde(default)]
    pub start_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub end_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub home_team_uid: Option<TeamId>,
    #[serde(default)]
    pub away_team_uid: Option<TeamId>,
    #[serde(default)]
    pub match_type: Option<String>,
    #[serde(default)]
    pub result: Option<MatchResult>,
}

impl Match {
    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> MatchState {
        match self.result {
            Some(result) => {
                MatchState::Finalized(Score::new(result.score_home_team, result.score_away_team))
            }
            None => MatchState::Pending,
        }
    }
}

/// Observable lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Simulation has not attached a result yet.
    Pending,
    /// Terminal: the result is known.
    Finalized(Score),
}

impl MatchState {
    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        matches!(self, Self::Finalized(_))
    }
}

/// Request body for scheduling a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub arena_uid: ArenaId,
    pub start_at: DateTime<FixedOffset>,
    pub home_team_uid: TeamId,
    pub away_team_uid: TeamId,
}
