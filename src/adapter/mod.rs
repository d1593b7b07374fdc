//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Discord slash commands and the command-line interface
//! - [`outbound`] - Discord channel gateway

pub mod inbound;
pub mod outbound;
