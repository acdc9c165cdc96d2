//! Contract between a scenario and the host that runs virtual users.

use async_trait::async_trait;

use crate::domain::ScenarioReport;
use crate::error::Result;

/// What the host should do after an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iteration {
    /// Run the scenario again for this user.
    Continue,
    /// This user is done; start no further iterations.
    Stop,
}

/// Result of one scenario iteration plus the host directive.
#[derive(Debug)]
pub struct IterationOutcome {
    pub result: Result<ScenarioReport>,
    pub next: Iteration,
}

/// One virtual user's unit of work.
#[async_trait]
pub trait ScenarioTask: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    async fn iterate(&self) -> IterationOutcome;
}
