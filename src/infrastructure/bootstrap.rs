//! Composition root: builds the Discord client and runs it.

use serenity::all::{ApplicationId, Client, GatewayIntents};
use tracing::info;

use crate::adapter::inbound::discord::SignalHandler;
use crate::error::Result;
use crate::infrastructure::config::discord::Credentials;
use crate::infrastructure::config::settings::Config;

/// Slash commands need guild events only; no message content.
pub const INTENTS: GatewayIntents = GatewayIntents::GUILDS;

/// Connect to the gateway and serve commands until the connection ends.
///
/// # Errors
///
/// Returns an error when the client cannot be built or the gateway
/// connection fails.
pub async fn run(config: &Config, credentials: &Credentials) -> Result<()> {
    let handler = SignalHandler::new(config.discord.register_commands);

    let mut builder = Client::builder(&credentials.token, INTENTS).event_handler(handler);
    if let Some(id) = credentials.application_id {
        builder = builder.application_id(ApplicationId::new(id));
    }

    let mut client = builder.await?;
    info!(
        register_commands = config.discord.register_commands,
        "Starting Discord client"
    );
    client.start().await?;
    Ok(())
}
