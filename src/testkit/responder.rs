//! [`Responder`] that records what the application answered.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{GatewayError, Result};
use crate::port::inbound::Responder;

/// One call made on the responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Reply(String),
    Defer,
    Edit(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    Record,
    Fail,
    PanicOnDefer,
}

/// Thread-safe response collector. Clones share the recording.
#[derive(Clone, Default)]
pub struct RecordingResponder {
    responses: Arc<Mutex<Vec<Response>>>,
    failing_edits: Arc<Mutex<usize>>,
    mode: Mode,
}

impl RecordingResponder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A responder whose every call fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            mode: Mode::Fail,
            ..Self::default()
        }
    }

    /// A responder that panics when asked to defer.
    #[must_use]
    pub fn panicking_on_defer() -> Self {
        Self {
            mode: Mode::PanicOnDefer,
            ..Self::default()
        }
    }

    /// A responder whose first `count` edits fail.
    #[must_use]
    pub fn failing_edits(count: usize) -> Self {
        Self {
            failing_edits: Arc::new(Mutex::new(count)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn responses(&self) -> Vec<Response> {
        self.responses.lock().clone()
    }

    /// Text of the last reply or edit, if any.
    #[must_use]
    pub fn final_text(&self) -> Option<String> {
        self.responses.lock().iter().rev().find_map(|r| match r {
            Response::Reply(text) | Response::Edit(text) => Some(text.clone()),
            Response::Defer => None,
        })
    }

    fn record(&self, response: Response) -> Result<()> {
        if self.mode == Mode::Fail {
            return Err(GatewayError::Request("responder offline".to_string()).into());
        }
        self.responses.lock().push(response);
        Ok(())
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn reply(&self, content: &str) -> Result<()> {
        self.record(Response::Reply(content.to_string()))
    }

    async fn defer(&self) -> Result<()> {
        if self.mode == Mode::PanicOnDefer {
            panic!("scripted panic while deferring");
        }
        self.record(Response::Defer)
    }

    async fn edit_reply(&self, content: &str) -> Result<()> {
        {
            let mut remaining = self.failing_edits.lock();
            if *remaining > 0 {
                *remaining -= 1;
                return Err(GatewayError::Request("unknown webhook".to_string()).into());
            }
        }
        self.record(Response::Edit(content.to_string()))
    }
}
