//! Single-acknowledgement guard for one command invocation.

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::port::inbound::Responder;

/// Where an invocation stands with respect to its one allowed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckState {
    Unacknowledged,
    Deferred,
    Replied,
}

/// Wraps a [`Responder`] and enforces one reply per invocation.
///
/// A reply after [`Acknowledgement::defer`] completes the deferred response
/// instead of sending a new one.
pub struct Acknowledgement<'a> {
    responder: &'a dyn Responder,
    state: Mutex<AckState>,
}

impl<'a> Acknowledgement<'a> {
    #[must_use]
    pub fn new(responder: &'a dyn Responder) -> Self {
        Self {
            responder,
            state: Mutex::new(AckState::Unacknowledged),
        }
    }

    #[must_use]
    pub fn state(&self) -> AckState {
        *self.state.lock()
    }

    /// Send the final reply.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyAcknowledged`] if a reply was already sent, or
    /// the responder's error if delivery fails.
    pub async fn reply(&self, content: &str) -> Result<()> {
        match self.state() {
            AckState::Unacknowledged => self.responder.reply(content).await?,
            AckState::Deferred => self.responder.edit_reply(content).await?,
            AckState::Replied => return Err(Error::AlreadyAcknowledged),
        }
        *self.state.lock() = AckState::Replied;
        Ok(())
    }

    /// Acknowledge now and reply later. No-op once acknowledged.
    ///
    /// # Errors
    ///
    /// Returns the responder's error if the deferral cannot be sent.
    pub async fn defer(&self) -> Result<()> {
        if self.state() != AckState::Unacknowledged {
            return Ok(());
        }
        self.responder.defer().await?;
        *self.state.lock() = AckState::Deferred;
        Ok(())
    }
}
