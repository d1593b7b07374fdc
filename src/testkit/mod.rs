//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`gateway`] - [`FakeGateway`](gateway::FakeGateway), an in-memory
//!   [`ChannelGateway`](crate::port::ChannelGateway) with scripted failures.
//! - [`responder`] - [`RecordingResponder`](responder::RecordingResponder),
//!   which records every acknowledgement call.
//! - [`request`] - Canonical `/entry` and `/stats` requests.

pub mod gateway;
pub mod request;
pub mod responder;
