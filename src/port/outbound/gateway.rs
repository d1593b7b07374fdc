//! Channel gateway port.
//!
//! Abstracts the chat platform's channel lookup, permission introspection
//! and message delivery so the dispatch flow can run against any client.

use async_trait::async_trait;

use crate::error::GatewayError;

/// Broad channel categories the dispatch flow cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Regular guild text channel.
    Text,
    /// News channel that followers can subscribe to.
    Announcement,
    /// Public, private or announcement thread.
    Thread,
    /// Voice channel with its built-in text chat.
    Voice,
    /// Stage channel with its built-in text chat.
    Stage,
    /// Direct or group message channel.
    Direct,
    /// Channel category.
    Category,
    /// Forum; messages must go into a post.
    Forum,
    /// Any type the client does not recognise.
    Unknown,
}

impl ChannelKind {
    /// Whether plain text messages can be posted to this kind of channel.
    #[must_use]
    pub const fn is_text_based(self) -> bool {
        matches!(
            self,
            Self::Text | Self::Announcement | Self::Thread | Self::Voice | Self::Stage | Self::Direct
        )
    }
}

/// Display details of a resolved channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    /// Channel identifier as text.
    pub id: String,
    /// Display name used in delivery reports.
    pub name: String,
    /// Channel category.
    pub kind: ChannelKind,
}

/// Outbound access to destination channels.
///
/// `Channel` is the client's own handle for a resolved channel, so
/// permission checks and sends can reuse what `resolve` fetched.
#[async_trait]
pub trait ChannelGateway: Send + Sync {
    /// Client handle for a resolved channel.
    type Channel: Send + Sync;

    /// Look a channel up by identifier. `Ok(None)` means it does not exist.
    async fn resolve(&self, id: &str) -> Result<Option<Self::Channel>, GatewayError>;

    /// Identifier, name and kind of a resolved channel.
    fn describe(&self, channel: &Self::Channel) -> ChannelInfo;

    /// Whether the bot may send messages in the channel.
    async fn can_send(&self, channel: &Self::Channel) -> Result<bool, GatewayError>;

    /// Post `content` as a plain message.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the platform rejects the message.
    async fn send(&self, channel: &Self::Channel, content: &str) -> Result<(), GatewayError>;
}
