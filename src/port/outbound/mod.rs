//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! Each remote service gets its own trait so a scenario can be assembled
//! from any mix of real clients and scripted doubles.

pub mod game;
pub mod roster;
pub mod system;
pub mod team;
