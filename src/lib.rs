//! Matchday - end-to-end friendly match scenario against the league
//! microservices.
//!
//! One run builds two fictive teams from the roster, opens a budget for
//! each, schedules a friendly match in the first arena, waits for the game
//! service to publish a result and finally re-reads both budgets to show
//! the reward.
//!
//! # Architecture
//!
//! - [`domain`] - Service-agnostic types and the outcome rule
//! - [`port`] - Inbound scenario trait and outbound service traits
//! - [`adapter`] - CLI (inbound) plus HTTP clients and system capabilities
//!   (outbound)
//! - [`application`] - Use cases, the scenario itself and the virtual-user
//!   host
//! - [`infrastructure`] - Configuration and the composition root
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Expose [`testkit`] to integration tests

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
