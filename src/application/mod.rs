//! Application services (use cases).
//!
//! Orchestrates the domain logic behind each slash command and drives the
//! ports: replies through [`Responder`](crate::port::Responder), delivery
//! through [`ChannelGateway`](crate::port::ChannelGateway).

pub mod acknowledgement;
pub mod dispatch;
pub mod entry;
pub mod service;
pub mod stats;

pub use acknowledgement::{AckState, Acknowledgement};
pub use dispatch::{dispatch, Delivery, DeliveryFailure, DeliveryReport};
pub use entry::{run_entry, EntryRequest, PreparedSignal};
pub use service::{SignalService, SlashCommand};
pub use stats::{run_stats, StatsRequest};
