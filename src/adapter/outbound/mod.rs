//! Outbound adapters: implementations of the driven ports.

#[cfg(feature = "discord")]
pub mod discord;
