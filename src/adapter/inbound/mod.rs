//! Inbound adapters: the ways commands reach the application.

pub mod cli;
#[cfg(feature = "discord")]
pub mod discord;
