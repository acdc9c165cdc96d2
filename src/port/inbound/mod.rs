//! Inbound ports (driving side).

pub mod scenario;
