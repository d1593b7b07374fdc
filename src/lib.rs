//! Signalcast - trade-signal relay bot for Discord.
//!
//! Traders invoke `/entry` with a pair, an entry price and an order type. The
//! bot derives three take-profit levels and a stop loss at fixed pip
//! distances, renders a signal message, and posts it to every channel the
//! trader named, answering with one private summary of where it landed.
//! `/stats` relays a performance summary the same way.
//!
//! # Architecture
//!
//! - [`domain`] - Pip table, level calculation, message rendering
//! - [`port`] - `Responder` (inbound) and `ChannelGateway` (outbound) traits
//! - [`application`] - Command flows, fan-out, acknowledgement guard
//! - [`adapter`] - Discord (serenity) and CLI implementations of the ports
//! - [`infrastructure`] - Configuration and client bootstrap
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `discord` (default) - serenity-backed gateway and event handler
//! - `testkit` - in-memory fakes for the ports
//!
//! # Example
//!
//! ```
//! use signalcast::domain::{calculate_levels, format_signal};
//!
//! let levels = calculate_levels("EURUSD", 1.2345, "buy_limit", None).unwrap();
//! assert_eq!(levels.tp1.to_string(), "$1.2365");
//!
//! let message = format_signal("EURUSD", "buy_limit", &levels, "@signals");
//! assert!(message.starts_with("**Trade signal for: EURUSD**"));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
