//! [`ChannelGateway`] backed by a serenity client context.

use async_trait::async_trait;
use serenity::all::{Channel, ChannelId, ChannelType, Context};

use crate::error::GatewayError;
use crate::port::outbound::{ChannelGateway, ChannelInfo, ChannelKind};

/// Resolves and posts to Discord channels using the event's [`Context`].
#[derive(Clone)]
pub struct DiscordGateway {
    ctx: Context,
}

impl DiscordGateway {
    #[must_use]
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

/// Parse a snowflake. Zero is not a valid channel id.
fn parse_channel_id(id: &str) -> Result<ChannelId, GatewayError> {
    id.parse::<u64>()
        .ok()
        .filter(|raw| *raw != 0)
        .map(ChannelId::new)
        .ok_or(GatewayError::InvalidChannelId)
}

fn request_error(err: &serenity::Error) -> GatewayError {
    GatewayError::Request(err.to_string())
}

fn is_not_found(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(http) => http.status_code().map(|s| s.as_u16()) == Some(404),
        _ => false,
    }
}

fn channel_kind(kind: ChannelType) -> ChannelKind {
    match kind {
        ChannelType::Text => ChannelKind::Text,
        ChannelType::News => ChannelKind::Announcement,
        ChannelType::PublicThread | ChannelType::PrivateThread | ChannelType::NewsThread => {
            ChannelKind::Thread
        }
        ChannelType::Voice => ChannelKind::Voice,
        ChannelType::Stage => ChannelKind::Stage,
        ChannelType::Private => ChannelKind::Direct,
        ChannelType::Category => ChannelKind::Category,
        ChannelType::Forum => ChannelKind::Forum,
        _ => ChannelKind::Unknown,
    }
}

#[async_trait]
impl ChannelGateway for DiscordGateway {
    type Channel = Channel;

    async fn resolve(&self, id: &str) -> Result<Option<Channel>, GatewayError> {
        let channel_id = parse_channel_id(id)?;

        match channel_id.to_channel(&self.ctx).await {
            Ok(channel) => Ok(Some(channel)),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(request_error(&e)),
        }
    }

    fn describe(&self, channel: &Channel) -> ChannelInfo {
        let id = channel.id().get().to_string();
        match channel {
            Channel::Guild(guild_channel) => ChannelInfo {
                id,
                name: guild_channel.name.clone(),
                kind: channel_kind(guild_channel.kind),
            },
            Channel::Private(private) => ChannelInfo {
                id,
                name: private.name(),
                kind: ChannelKind::Direct,
            },
            _ => ChannelInfo {
                name: id.clone(),
                id,
                kind: ChannelKind::Unknown,
            },
        }
    }

    async fn can_send(&self, channel: &Channel) -> Result<bool, GatewayError> {
        let Channel::Guild(guild_channel) = channel else {
            return Ok(true);
        };

        let bot_id = self.ctx.cache.current_user().id;
        let permissions = guild_channel
            .permissions_for_user(&self.ctx.cache, bot_id)
            .map_err(|e| request_error(&e))?;

        Ok(permissions.send_messages())
    }

    async fn send(&self, channel: &Channel, content: &str) -> Result<(), GatewayError> {
        channel
            .id()
            .say(&self.ctx.http, content)
            .await
            .map(|_| ())
            .map_err(|e| request_error(&e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflakes() {
        assert_eq!(parse_channel_id("123").unwrap(), ChannelId::new(123));
        assert_eq!(parse_channel_id("0"), Err(GatewayError::InvalidChannelId));
        assert_eq!(parse_channel_id("general"), Err(GatewayError::InvalidChannelId));
        assert_eq!(parse_channel_id("-5"), Err(GatewayError::InvalidChannelId));
    }

    #[test]
    fn maps_channel_types() {
        assert_eq!(channel_kind(ChannelType::Text), ChannelKind::Text);
        assert_eq!(channel_kind(ChannelType::News), ChannelKind::Announcement);
        assert_eq!(channel_kind(ChannelType::PublicThread), ChannelKind::Thread);
        assert_eq!(channel_kind(ChannelType::Category), ChannelKind::Category);
        assert!(!channel_kind(ChannelType::Forum).is_text_based());
    }
}
