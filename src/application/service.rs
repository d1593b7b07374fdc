//! Command entry point with failure containment.
//!
//! Every invocation gets exactly one answer: the command's own reply, or a
//! generic error message when the flow fails or panics before replying.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use tracing::{error, info_span, Instrument};

use super::acknowledgement::{AckState, Acknowledgement};
use super::entry::{run_entry, EntryRequest};
use super::stats::{run_stats, StatsRequest};
use crate::error::Result;
use crate::port::inbound::Responder;
use crate::port::outbound::ChannelGateway;

/// A parsed slash command.
#[derive(Debug, Clone, PartialEq)]
pub enum SlashCommand {
    Entry(EntryRequest),
    Stats(StatsRequest),
}

impl SlashCommand {
    pub const ENTRY: &'static str = "entry";
    pub const STATS: &'static str = "stats";

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Entry(_) => Self::ENTRY,
            Self::Stats(_) => Self::STATS,
        }
    }
}

/// Runs slash commands against a channel gateway.
pub struct SignalService<G> {
    gateway: G,
}

impl<G: ChannelGateway> SignalService<G> {
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Handle one invocation of the command called `name`.
    ///
    /// `command` is the result of parsing the invocation's options; a parse
    /// failure is answered like any other internal error. Never fails;
    /// returns how the invocation was left.
    pub async fn handle(
        &self,
        name: &str,
        command: Result<SlashCommand>,
        responder: &dyn Responder,
    ) -> AckState {
        let ack = Acknowledgement::new(responder);
        let span = info_span!("command", command = name);

        let outcome = AssertUnwindSafe(self.run(command, &ack).instrument(span))
            .catch_unwind()
            .await;

        let failure = match outcome {
            Ok(Ok(())) => None,
            Ok(Err(e)) => Some(e.to_string()),
            Err(panic) => Some(panic_message(panic.as_ref())),
        };

        if let Some(reason) = failure {
            error!(command = name, error = %reason, "Error in command");
            self.answer_failure(name, &ack).await;
        }

        ack.state()
    }

    async fn run(&self, command: Result<SlashCommand>, ack: &Acknowledgement<'_>) -> Result<()> {
        match command? {
            SlashCommand::Entry(request) => run_entry(&self.gateway, &request, ack).await,
            SlashCommand::Stats(request) => run_stats(&self.gateway, &request, ack).await,
        }
    }

    async fn answer_failure(&self, name: &str, ack: &Acknowledgement<'_>) {
        if ack.state() == AckState::Replied {
            return;
        }

        let text =
            format!("An error occurred while processing your {name} command. Please try again.");
        if let Err(e) = ack.reply(&text).await {
            error!(command = name, error = %e, "Failed to send error reply");
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic".to_string()
    }
}
