//! Infrastructure configuration modules.

pub mod logging;
pub mod scenario;
pub mod services;
pub mod settings;
