//! Handler for `check config`.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::discord::Credentials;
use crate::infrastructure::config::settings::Config;

/// Validate configuration and credentials without connecting.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = if path.exists() {
        Config::load(path)?
    } else {
        output::warning("Config file not found, using defaults");
        Config::default()
    };

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("Log level", &config.logging.level);
    output::field("Log format", &config.logging.format);
    output::field("Register", config.discord.register_commands);

    match Credentials::from_env() {
        Ok(creds) => {
            output::success("Discord token detected");
            match creds.application_id {
                Some(id) => output::field("Application", id),
                None => output::field("Application", "from token"),
            }
        }
        Err(ConfigError::MissingField { .. }) => output::warning(
            "Discord token not configured (set DISCORD_TOKEN or DISCORD_TOKEN_PART1/PART2)",
        ),
        Err(e) => output::warning(&e.to_string()),
    }

    output::success("Configuration check complete");
    Ok(())
}
