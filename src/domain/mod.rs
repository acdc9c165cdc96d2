//! Service-agnostic types for the friendly match scenario.
//!
//! - [`id`] - UUID newtypes per remote resource
//! - [`credential`] - Bearer token supplied by the operator
//! - [`team`], [`budget`], [`arena`], [`fixture`] - Remote resources
//! - [`outcome`] - Score and the win/loss/draw rule
//! - [`schedule`] - Start-time policy for new matches
//! - [`report`] - What a completed run observed
//! - [`wire`] - Serde helpers for service payloads

pub mod arena;
pub mod budget;
pub mod credential;
pub mod fixture;
pub mod id;
pub mod outcome;
pub mod report;
pub mod schedule;
pub mod team;
pub mod wire;

pub use arena::Arena;
pub use budget::{BudgetRecord, NewBudget, DEFAULT_INITIAL_BUDGET};
pub use credential::BearerToken;
pub use fixture::{Match, MatchResult, MatchState, NewMatch};
pub use id::{ArenaId, BudgetId, MatchId, OwnerId, PlayerId, TeamId};
pub use outcome::{Outcome, Score};
pub use report::{ScenarioReport, TeamLedger};
pub use schedule::{
    SchedulePolicy, DEFAULT_BACKDATE_MINUTES, DEFAULT_UTC_OFFSET_HOURS, MAX_BACKDATE_MINUTES,
};
pub use team::{CharacteristicType, NewFictiveTeam, Team};
