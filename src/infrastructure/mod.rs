//! Infrastructure layer.
//!
//! Configuration loading and runtime wiring. No command logic lives here.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for the Discord client
//! - [`config`] - Configuration loading and validation

#[cfg(feature = "discord")]
pub mod bootstrap;
pub mod config;
