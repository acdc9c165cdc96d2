//! Team service client: fictive teams and budget systems.

use async_trait::async_trait;

use super::client::ApiClient;
use crate::domain::{BearerToken, BudgetId, BudgetRecord, NewBudget, NewFictiveTeam, Team};
use crate::error::Result;
use crate::port::outbound::team::TeamService;

const FICTIVE_TEAM_PATH: &str = "/v1/fictive-team/";
const BUDGET_SYSTEM_PATH: &str = "/api/budget-systems";

pub struct TeamClient {
    api: ApiClient,
}

impl TeamClient {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TeamService for TeamClient {
    async fn create_fictive_team(
        &self,
        auth: &BearerToken,
        team: &NewFictiveTeam,
    ) -> Result<Team> {
        self.api.post_json(auth, FICTIVE_TEAM_PATH, team).await
    }

    async fn create_budget(&self, auth: &BearerToken, budget: &NewBudget) -> Result<BudgetRecord> {
        self.api.post_json(auth, BUDGET_SYSTEM_PATH, budget).await
    }

    async fn get_budget(&self, auth: &BearerToken, id: BudgetId) -> Result<BudgetRecord> {
        let path = format!("{BUDGET_SYSTEM_PATH}/{id}");
        self.api.get_json(auth, &path, &[]).await
    }
}
