//! Budget systems: one funding record per team.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{BudgetId, TeamId};

/// Default amount every team is funded with at the start of a run.
pub const DEFAULT_INITIAL_BUDGET: i64 = 1000;

/// Budget record as returned by the team service.
///
/// The amount is adjusted by the backend as a side effect of match
/// simulation, so a record is only a snapshot of the moment it was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    pub guid: BudgetId,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub team_id: TeamId,
}

/// Request body for creating a budget system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub team_id: TeamId,
}
