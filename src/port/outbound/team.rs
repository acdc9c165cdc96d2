//! Team service port: fictive teams and their budget systems.

use async_trait::async_trait;

use crate::domain::{BearerToken, BudgetId, BudgetRecord, NewBudget, NewFictiveTeam, Team};
use crate::error::Result;

#[async_trait]
pub trait TeamService: Send + Sync {
    /// Create a fictive team. The returned guid is usable immediately.
    async fn create_fictive_team(&self, auth: &BearerToken, team: &NewFictiveTeam)
        -> Result<Team>;

    /// Create the budget system for a team.
    async fn create_budget(&self, auth: &BearerToken, budget: &NewBudget) -> Result<BudgetRecord>;

    /// Read the current state of a budget system. Never cached.
    async fn get_budget(&self, auth: &BearerToken, id: BudgetId) -> Result<BudgetRecord>;
}
