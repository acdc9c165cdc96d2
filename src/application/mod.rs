//! Application services (use cases).
//!
//! Each step of the friendly match journey is its own service; the
//! [`scenario`] module sequences them and [`host`] runs scenarios as
//! virtual users.

pub mod host;
pub mod ledger;
pub mod poller;
pub mod scenario;
pub mod schedule;
pub mod team;

pub use host::{run_users, UserRun};
pub use ledger::BudgetLedger;
pub use poller::{ResultPoller, DEFAULT_POLL_INTERVAL};
pub use scenario::{FriendlyMatchScenario, ScenarioServices, ScenarioSettings};
pub use schedule::MatchScheduler;
pub use team::TeamBuilder;
