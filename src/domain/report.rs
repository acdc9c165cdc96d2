//! Summary of one completed scenario run.

use rust_decimal::Decimal;
use serde::Serialize;

use super::budget::BudgetRecord;
use super::id::{ArenaId, MatchId};
use super::outcome::{Outcome, Score};
use super::team::Team;

/// One side of the match with its budget snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamLedger {
    pub team: Team,
    /// Snapshot taken right after the budget was opened.
    pub before: BudgetRecord,
    /// Snapshot re-read once the match result was known.
    pub after: BudgetRecord,
}

impl TeamLedger {
    /// Change in budget caused by the match.
    #[must_use]
    pub fn delta(&self) -> Decimal {
        self.after.amount - self.before.amount
    }
}

/// Everything observed during a friendly match run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub home: TeamLedger,
    pub away: TeamLedger,
    pub arena: ArenaId,
    pub match_id: MatchId,
    pub score: Score,
    pub outcome: Outcome,
}

impl ScenarioReport {
    /// The winning side, or `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<&TeamLedger> {
        match self.outcome {
            Outcome::Draw => None,
            Outcome::HomeWin => Some(&self.home),
            Outcome::AwayWin => Some(&self.away),
        }
    }
}
