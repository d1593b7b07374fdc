use anyhow::Context;
use clap::Parser;

use signalcast::adapter::inbound::cli::{self, command::Cli, output};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    if let Err(e) = run(Cli::parse()).await {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> anyhow::Result<()> {
    let command = args.command.name();
    cli::execute(args)
        .await
        .with_context(|| format!("`{command}` failed"))
}
