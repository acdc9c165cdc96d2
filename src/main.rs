use std::process::ExitCode;

use clap::Parser;
use matchday::adapter::inbound::cli::command::Cli;
use matchday::adapter::inbound::cli::output::{self, OutputConfig};
use matchday::adapter::inbound::cli::run;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    match run::execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
