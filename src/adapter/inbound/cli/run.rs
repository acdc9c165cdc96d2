//! Handler for the single `matchday` command.

use std::path::Path;
use std::process::ExitCode;

use rust_decimal::Decimal;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tokio::sync::watch;
use tracing::{info, warn};

use super::command::{Cli, TOKEN_ENV};
use super::diagnostic::ConfigDiagnostic;
use super::output;
use crate::application::{run_users, UserRun};
use crate::domain::{BearerToken, Outcome, ScenarioReport, TeamLedger};
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Shown when neither the flag nor the environment supplies a token.
pub const MISSING_TOKEN_MESSAGE: &str =
    "Please provide OAuth2 token using --oauth2-token CLI argument";

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Before")]
    before: String,
    #[tabled(rename = "After")]
    after: String,
    #[tabled(rename = "Delta")]
    delta: String,
}

impl From<&TeamLedger> for BudgetRow {
    fn from(ledger: &TeamLedger) -> Self {
        let delta = ledger.delta();
        let delta = if delta > Decimal::ZERO {
            format!("+{delta}")
        } else {
            delta.to_string()
        };

        Self {
            team: ledger.team.name.clone(),
            before: ledger.before.amount.to_string(),
            after: ledger.after.amount.to_string(),
            delta,
        }
    }
}

/// Execute the friendly match showcase.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or validated.
/// Scenario failures are reported per user and turn into a failing exit
/// code rather than an error.
pub async fn execute(cli: Cli) -> Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(LoadFailure::Rendered) => return Ok(ExitCode::FAILURE),
            Err(LoadFailure::Other(e)) => return Err(e),
        },
        None => Config::default(),
    };
    apply_overrides(&mut config, &cli);
    config.validate()?;
    config.init_logging();

    let credential = cli
        .oauth2_token
        .clone()
        .or_else(|| std::env::var(TOKEN_ENV).ok());
    let credential = BearerToken::from_raw(credential);

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Roster", &config.services.roster_url);
    output::field("Team", &config.services.team_url);
    output::field("Game", &config.services.game_url);
    output::field("Users", config.scenario.users);
    output::field(
        "Token",
        if credential.is_some() { "provided" } else { "missing" },
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, shutting down");
            let _ = shutdown_tx.send(true);
        }
    });

    let spinner = credential
        .as_ref()
        .map(|_| output::spinner("Playing friendly match..."));

    let users = config.scenario.users;
    let factory = bootstrap::scenario_factory(&config, credential, shutdown_rx.clone())?;
    let runs = run_users(users, factory, shutdown_rx).await;

    let failed = runs.iter().filter(|run| is_failure(run)).count();
    if let Some(pb) = spinner {
        let message = if failed == 0 {
            "Friendly match finished"
        } else {
            "Friendly match failed"
        };
        output::spinner_finish(&pb, failed == 0, message);
    }

    for run in &runs {
        report_run(run, runs.len() > 1);
    }

    output::note("Friendly match showcase ended.");

    if failed > 0 {
        warn!(failed, "Some virtual users failed");
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

enum LoadFailure {
    /// A diagnostic has already been printed.
    Rendered,
    Other(Error),
}

fn load_config(path: &Path) -> std::result::Result<Config, LoadFailure> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LoadFailure::Other(ConfigError::ReadFile(e).into()))?;

    match Config::parse_toml(&content) {
        Ok(config) => Ok(config),
        Err(Error::Config(ConfigError::Parse(e))) => {
            ConfigDiagnostic::from_toml(&e, &path.display().to_string(), &content).emit();
            Err(LoadFailure::Rendered)
        }
        Err(e) => Err(LoadFailure::Other(e)),
    }
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(users) = cli.users {
        config.scenario.users = users;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    } else if cli.verbose >= 2 {
        config.logging.level = "trace".into();
    } else if cli.verbose == 1 {
        config.logging.level = "debug".into();
    }
    if cli.json_logs {
        config.logging.format = "json".into();
    }
}

fn is_failure(run: &UserRun) -> bool {
    matches!(
        run.result,
        Err(ref e) if !matches!(e, Error::MissingCredential | Error::Cancelled)
    )
}

fn report_run(run: &UserRun, label_users: bool) {
    if label_users {
        output::section(&format!("User {}", run.user));
    }

    match &run.result {
        Ok(report) => report_success(report),
        Err(Error::MissingCredential) => output::warning(MISSING_TOKEN_MESSAGE),
        Err(Error::Cancelled) => output::warning("Scenario cancelled before the match finished"),
        Err(e) => output::error(&e.to_string()),
    }
}

fn report_success(report: &ScenarioReport) {
    if output::is_json() {
        match serde_json::to_value(report) {
            Ok(payload) => output::json_payload("report", payload),
            Err(e) => output::error(&e.to_string()),
        }
        return;
    }

    output::section("Friendly match");
    output::field("Arena", report.arena);
    output::field("Match", report.match_id);
    output::field("Score", output::highlight(report.score));
    output::success(&narrative(report.outcome));

    output::section("Budgets");
    let rows = [BudgetRow::from(&report.home), BudgetRow::from(&report.away)];
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output::lines(&table.to_string());
}

fn narrative(outcome: Outcome) -> String {
    match outcome {
        Outcome::Draw => "Match was a draw! Both teams have received a reward!".to_string(),
        Outcome::HomeWin => "Home team won (Team0)!".to_string(),
        Outcome::AwayWin => "Away team won (Team1)!".to_string(),
    }
}
