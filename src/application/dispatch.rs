//! Best-effort fan-out of one message to many channels.
//!
//! Every destination is attempted independently and concurrently. Outcomes
//! are collected in destination order; a failure (or panic) while handling
//! one destination never affects the others.

use std::fmt;
use std::panic::AssertUnwindSafe;

use futures_util::future::join_all;
use futures_util::FutureExt;
use tracing::{debug, warn};

use crate::error::GatewayError;
use crate::port::outbound::ChannelGateway;

/// Why a destination did not receive the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryFailure {
    NotFound { id: String },
    NotTextChannel { name: String },
    MissingPermission { name: String },
    SendFailed { id: String, reason: String },
}

impl fmt::Display for DeliveryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "Channel ID {id} not found"),
            Self::NotTextChannel { name } => write!(f, "{name} is not a text channel"),
            Self::MissingPermission { name } => {
                write!(f, "No permission to send messages in {name}")
            }
            Self::SendFailed { id, reason } => write!(f, "{id}: {reason}"),
        }
    }
}

/// Outcome for a single destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent { name: String },
    Failed(DeliveryFailure),
}

/// Ordered outcomes of a fan-out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: Vec<String>,
    pub failed: Vec<DeliveryFailure>,
}

impl DeliveryReport {
    fn push(&mut self, delivery: Delivery) {
        match delivery {
            Delivery::Sent { name } => self.delivered.push(name),
            Delivery::Failed(failure) => self.failed.push(failure),
        }
    }

    /// Reply text for the invoking user; `subject` names what was sent.
    #[must_use]
    pub fn summary(&self, subject: &str) -> String {
        let mut lines = Vec::with_capacity(2);
        if !self.delivered.is_empty() {
            lines.push(format!(
                "✅ {subject} sent successfully to: {}",
                self.delivered.join(", ")
            ));
        }
        if !self.failed.is_empty() {
            let failed: Vec<String> = self.failed.iter().map(ToString::to_string).collect();
            lines.push(format!("❌ Failed to send to: {}", failed.join(", ")));
        }

        if lines.is_empty() {
            format!("{subject} processing completed.")
        } else {
            lines.join("\n")
        }
    }
}

/// Send `content` to every destination and report each outcome.
pub async fn dispatch<G: ChannelGateway>(
    gateway: &G,
    destinations: &[String],
    content: &str,
) -> DeliveryReport {
    let attempts = destinations
        .iter()
        .map(|id| deliver(gateway, id.as_str(), content));

    let mut report = DeliveryReport::default();
    for delivery in join_all(attempts).await {
        report.push(delivery);
    }
    report
}

async fn deliver<G: ChannelGateway>(gateway: &G, id: &str, content: &str) -> Delivery {
    let attempt = AssertUnwindSafe(try_deliver(gateway, id, content)).catch_unwind();

    match attempt.await {
        Ok(Ok(delivery)) => delivery,
        Ok(Err(e)) => {
            warn!(channel_id = id, error = %e, "Error sending to channel");
            Delivery::Failed(DeliveryFailure::SendFailed {
                id: id.to_string(),
                reason: e.to_string(),
            })
        }
        Err(_) => {
            warn!(channel_id = id, "Delivery task panicked");
            Delivery::Failed(DeliveryFailure::SendFailed {
                id: id.to_string(),
                reason: "internal error".to_string(),
            })
        }
    }
}

async fn try_deliver<G: ChannelGateway>(
    gateway: &G,
    id: &str,
    content: &str,
) -> Result<Delivery, GatewayError> {
    let Some(channel) = gateway.resolve(id.trim()).await? else {
        return Ok(Delivery::Failed(DeliveryFailure::NotFound { id: id.to_string() }));
    };

    let info = gateway.describe(&channel);
    if !info.kind.is_text_based() {
        return Ok(Delivery::Failed(DeliveryFailure::NotTextChannel { name: info.name }));
    }
    if !gateway.can_send(&channel).await? {
        return Ok(Delivery::Failed(DeliveryFailure::MissingPermission { name: info.name }));
    }

    gateway.send(&channel, content).await?;
    debug!(channel_id = %info.id, channel = %info.name, "Message delivered");

    Ok(Delivery::Sent { name: info.name })
}
