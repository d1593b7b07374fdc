//! In-memory [`ChannelGateway`] for exercising the dispatch flow.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::GatewayError;
use crate::port::outbound::{ChannelGateway, ChannelInfo, ChannelKind};

#[derive(Default)]
struct State {
    channels: HashMap<String, ChannelInfo>,
    denied: HashSet<String>,
    send_failures: HashMap<String, String>,
    panics: HashSet<String>,
    sent: Vec<(String, String)>,
}

/// Scriptable channel gateway.
///
/// Identifiers that are not all digits fail to resolve with
/// [`GatewayError::InvalidChannelId`]; numeric identifiers that were never
/// registered resolve to `None`. Clones share state.
#[derive(Clone, Default)]
pub struct FakeGateway {
    state: Arc<Mutex<State>>,
}

impl FakeGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_channel(self, id: &str, name: &str, kind: ChannelKind) -> Self {
        self.state.lock().channels.insert(
            id.to_string(),
            ChannelInfo {
                id: id.to_string(),
                name: name.to_string(),
                kind,
            },
        );
        self
    }

    /// Report no send permission for `id`.
    #[must_use]
    pub fn deny_send(self, id: &str) -> Self {
        self.state.lock().denied.insert(id.to_string());
        self
    }

    /// Fail sends to `id` with `reason`.
    #[must_use]
    pub fn fail_send(self, id: &str, reason: &str) -> Self {
        self.state
            .lock()
            .send_failures
            .insert(id.to_string(), reason.to_string());
        self
    }

    /// Panic while sending to `id`.
    #[must_use]
    pub fn panic_on_send(self, id: &str) -> Self {
        self.state.lock().panics.insert(id.to_string());
        self
    }

    /// Messages delivered so far as `(channel id, content)`.
    #[must_use]
    pub fn sent(&self) -> Vec<(String, String)> {
        self.state.lock().sent.clone()
    }
}

#[async_trait]
impl ChannelGateway for FakeGateway {
    type Channel = ChannelInfo;

    async fn resolve(&self, id: &str) -> Result<Option<ChannelInfo>, GatewayError> {
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GatewayError::InvalidChannelId);
        }
        Ok(self.state.lock().channels.get(id).cloned())
    }

    fn describe(&self, channel: &ChannelInfo) -> ChannelInfo {
        channel.clone()
    }

    async fn can_send(&self, channel: &ChannelInfo) -> Result<bool, GatewayError> {
        Ok(!self.state.lock().denied.contains(&channel.id))
    }

    async fn send(&self, channel: &ChannelInfo, content: &str) -> Result<(), GatewayError> {
        let should_panic = self.state.lock().panics.contains(&channel.id);
        if should_panic {
            panic!("scripted panic sending to {}", channel.id);
        }

        let mut state = self.state.lock();
        if let Some(reason) = state.send_failures.get(&channel.id) {
            return Err(GatewayError::Request(reason.clone()));
        }
        state.sent.push((channel.id.clone(), content.to_string()));
        Ok(())
    }
}
