//! Wiring and configuration.
//!
//! - [`config`] - TOML settings with defaults and validation
//! - [`bootstrap`] - Builds HTTP clients and scenario instances from a
//!   [`Config`](config::settings::Config)

pub mod bootstrap;
pub mod config;
