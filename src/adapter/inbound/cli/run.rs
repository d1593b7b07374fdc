//! Handler for the `run` command.

use tokio::signal;
use tracing::info;

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::discord::Credentials;
use crate::infrastructure::config::settings::Config;

/// Execute the run command.
pub async fn execute(args: &ConfigPathArg) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;
    if output::is_json() {
        config.logging.format = "json".into();
    }
    let credentials = Credentials::from_env()?;

    if !output::is_quiet() && !output::is_json() {
        output::header(env!("CARGO_PKG_VERSION"));
        output::field("Config", args.config.display());
        output::field("Log level", &config.logging.level);
        output::field(
            "Application",
            credentials
                .application_id
                .map_or_else(|| "from token".to_string(), |id| id.to_string()),
        );
        output::field("Register", config.discord.register_commands);
        println!();
    }

    config.init_logging();
    info!("signalcast starting");

    tokio::select! {
        result = bootstrap::run(&config, &credentials) => result?,
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("signalcast stopped");
    Ok(())
}
