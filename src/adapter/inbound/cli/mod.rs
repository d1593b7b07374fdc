//! CLI module graph and command dispatch.

pub mod check;
pub mod command;
pub mod output;
pub mod preview;
#[cfg(feature = "discord")]
pub mod run;

use command::{CheckCommand, Cli, Commands};
use output::OutputConfig;

use crate::error::Result;

/// Apply global flags and run the selected subcommand.
///
/// # Errors
///
/// Propagates the subcommand's error.
pub async fn execute(cli: Cli) -> Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet), cli.color);

    match cli.command {
        Commands::Run(args) => run_bot(&args).await,
        Commands::Preview(args) => preview::execute(&args),
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(&args.config),
    }
}

#[cfg(feature = "discord")]
async fn run_bot(args: &command::ConfigPathArg) -> Result<()> {
    run::execute(args).await
}

#[cfg(not(feature = "discord"))]
async fn run_bot(_args: &command::ConfigPathArg) -> Result<()> {
    Err(crate::error::ConfigError::InvalidValue {
        field: "features",
        reason: "built without the `discord` feature".to_string(),
    }
    .into())
}
