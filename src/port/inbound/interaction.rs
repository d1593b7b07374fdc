//! Acknowledgement surface of an inbound command invocation.

use async_trait::async_trait;

use crate::error::Result;

/// Replies to the user who invoked a command. All replies are ephemeral.
///
/// The platform allows exactly one initial response per invocation: either
/// a message or a deferral, which is later completed with
/// [`Responder::edit_reply`].
#[async_trait]
pub trait Responder: Send + Sync {
    async fn reply(&self, content: &str) -> Result<()>;

    async fn defer(&self) -> Result<()>;

    async fn edit_reply(&self, content: &str) -> Result<()>;
}
