//! Command-line interface definitions.
//!
//! The CLI has a single job: run the friendly match showcase once per
//! virtual user. Everything except the token has a sensible default.

use clap::Parser;
use std::path::PathBuf;

/// Environment variable consulted when `--oauth2-token` is absent.
pub const TOKEN_ENV: &str = "OAUTH2_TOKEN";

/// End-to-end friendly match scenario runner
#[derive(Parser, Debug)]
#[command(name = "matchday")]
#[command(version)]
pub struct Cli {
    /// OAuth2 token from the oauth-client (falls back to OAUTH2_TOKEN)
    #[arg(long = "oauth2-token", value_name = "TOKEN")]
    pub oauth2_token: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of concurrent virtual users
    #[arg(short, long, value_name = "N")]
    pub users: Option<usize>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
