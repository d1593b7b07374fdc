//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌───────────────┐      ┌──────────────────┐      ┌────────────────┐
//!   │ Discord event │ ───▶ │   Application    │ ───▶ │ ChannelGateway │
//!   │   (inbound)   │ ◀─── │ domain + ports   │      │   (outbound)   │
//!   └───────────────┘      └──────────────────┘      └────────────────┘
//!        Responder
//! ```
//!
//! - [`inbound::Responder`] - Ephemeral replies to the invoking user
//! - [`outbound::ChannelGateway`] - Channel lookup, permissions and delivery

pub mod inbound;
pub mod outbound;

pub use inbound::Responder;
pub use outbound::{ChannelGateway, ChannelInfo, ChannelKind};
