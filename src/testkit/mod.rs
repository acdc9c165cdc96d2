//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`system`] - Deterministic [`Clock`](crate::port::Clock) and
//!   [`IdGenerator`](crate::port::IdGenerator) implementations.
//! - [`domain`] - Builders for domain primitives: ids, teams, budgets,
//!   matches.

pub mod domain;
pub mod system;
