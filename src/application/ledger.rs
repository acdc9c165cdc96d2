//! Budget ledger: opens and re-reads one budget system per team.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::domain::{BearerToken, BudgetRecord, NewBudget, TeamId};
use crate::error::{Error, Result};
use crate::port::outbound::team::TeamService;

pub struct BudgetLedger {
    teams: Arc<dyn TeamService>,
    initial_amount: Decimal,
}

impl BudgetLedger {
    pub fn new(teams: Arc<dyn TeamService>, initial_amount: Decimal) -> Self {
        Self {
            teams,
            initial_amount,
        }
    }

    /// Open the budget system for a freshly created team.
    pub async fn open(&self, auth: &BearerToken, team_id: TeamId) -> Result<BudgetRecord> {
        let request = NewBudget {
            amount: self.initial_amount,
            team_id,
        };
        let record = self.teams.create_budget(auth, &request).await?;
        ensure_owner(&record, team_id)?;

        info!(
            team_id = %team_id,
            budget_id = %record.guid,
            amount = %record.amount,
            "Created budget system"
        );
        Ok(record)
    }

    /// Fetch the current state of a budget opened earlier.
    ///
    /// Always goes to the server; the backend changes amounts on its own
    /// after a match is simulated.
    pub async fn read(&self, auth: &BearerToken, opened: &BudgetRecord) -> Result<BudgetRecord> {
        let record = self.teams.get_budget(auth, opened.guid).await?;
        ensure_owner(&record, opened.team_id)?;

        debug!(budget_id = %record.guid, amount = %record.amount, "Read budget system");
        Ok(record)
    }
}

fn ensure_owner(record: &BudgetRecord, team_id: TeamId) -> Result<()> {
    if record.team_id == team_id {
        return Ok(());
    }
    Err(Error::IdentifierMismatch {
        resource: "budget system",
        expected: team_id.to_string(),
        found: record.team_id.to_string(),
    })
}
