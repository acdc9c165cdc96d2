//! Port traits between the application and the outside world. Depend
//! only on domain.
//!
//! ```text
//!   host ──▶ ScenarioTask (inbound)
//!                 │
//!                 ▼
//!   RosterService · TeamService · GameService · Clock · IdGenerator (outbound)
//! ```
//!
//! - [`inbound`] - What the virtual-user host drives
//! - [`outbound`] - Remote services plus the clock and id capabilities

pub mod inbound;
pub mod outbound;

pub use inbound::scenario::{Iteration, IterationOutcome, ScenarioTask};
pub use outbound::game::GameService;
pub use outbound::roster::RosterService;
pub use outbound::system::{Clock, IdGenerator};
pub use outbound::team::TeamService;
