//! Gateway event handler: command registration and interaction routing.

use async_trait::async_trait;
use serenity::all::{
    CommandDataOption, CommandDataOptionValue, Context, EventHandler, Guild, Interaction, Ready,
};
use tracing::{debug, error, info};

use super::options::{parse_command, CommandOptions, OptionValue};
use super::responder::InteractionResponder;
use super::schema;
use crate::adapter::outbound::discord::DiscordGateway;
use crate::application::SignalService;

/// Serenity event handler for the signal bot.
#[derive(Debug, Clone)]
pub struct SignalHandler {
    register_commands: bool,
}

impl SignalHandler {
    #[must_use]
    pub const fn new(register_commands: bool) -> Self {
        Self { register_commands }
    }
}

impl From<&[CommandDataOption]> for CommandOptions {
    fn from(options: &[CommandDataOption]) -> Self {
        options.iter().fold(Self::new(), |acc, option| {
            let value = match &option.value {
                CommandDataOptionValue::String(s) => OptionValue::String(s.clone()),
                CommandDataOptionValue::Number(n) => OptionValue::Number(*n),
                CommandDataOptionValue::Integer(i) => OptionValue::Integer(*i),
                _ => OptionValue::Unsupported,
            };
            acc.with(&option.name, value)
        })
    }
}

#[async_trait]
impl EventHandler for SignalHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            "Connected to Discord"
        );
    }

    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        if !self.register_commands {
            debug!(guild_id = guild.id.get(), "Command registration disabled");
            return;
        }

        match guild.id.set_commands(&ctx.http, schema::commands()).await {
            Ok(registered) => info!(
                guild_id = guild.id.get(),
                guild = %guild.name,
                commands = registered.len(),
                new = is_new.unwrap_or(false),
                "Registered slash commands"
            ),
            Err(e) => error!(
                guild_id = guild.id.get(),
                guild = %guild.name,
                error = %e,
                "Failed to register slash commands"
            ),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let name = command.data.name.clone();
        let parsed = parse_command(&name, &CommandOptions::from(command.data.options.as_slice()));
        let responder = InteractionResponder::new(ctx.http.clone(), command);
        let service = SignalService::new(DiscordGateway::new(ctx));

        let state = service.handle(&name, parsed, &responder).await;
        debug!(command = %name, state = ?state, "Interaction finished");
    }
}
