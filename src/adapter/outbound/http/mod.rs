//! REST clients for the backend services.
//!
//! - [`roster`] - World-list service (players)
//! - [`team`] - Team service (fictive teams, budget systems)
//! - [`game`] - Game service (arenas, matches)

pub mod client;
pub mod dto;
pub mod game;
pub mod roster;
pub mod team;

pub use client::ApiClient;
pub use game::GameClient;
pub use roster::{RosterClient, DEFAULT_PAGE_SIZE};
pub use team::TeamClient;
