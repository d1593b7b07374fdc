//! [`Responder`] over a Discord command interaction. Every answer is ephemeral.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{
    CommandInteraction, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, Http,
};

use crate::error::Result;
use crate::port::inbound::Responder;

/// Answers one slash-command invocation through the Discord HTTP API.
pub struct InteractionResponder {
    /// Shared HTTP client from the gateway context.
    http: Arc<Http>,
    /// The invocation being answered.
    command: CommandInteraction,
}

impl InteractionResponder {
    /// Wrap an invocation for answering.
    #[must_use]
    pub fn new(http: Arc<Http>, command: CommandInteraction) -> Self {
        Self { http, command }
    }
}

#[async_trait]
impl Responder for InteractionResponder {
    /// Send the initial ephemeral message.
    async fn reply(&self, content: &str) -> Result<()> {
        let message = CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true);
        self.command
            .create_response(&self.http, CreateInteractionResponse::Message(message))
            .await?;
        Ok(())
    }

    /// Acknowledge with an ephemeral "thinking" state.
    async fn defer(&self) -> Result<()> {
        self.command.defer_ephemeral(&self.http).await?;
        Ok(())
    }

    /// Replace the deferred or initial response text.
    async fn edit_reply(&self, content: &str) -> Result<()> {
        self.command
            .edit_response(&self.http, EditInteractionResponse::new().content(content))
            .await?;
        Ok(())
    }
}
