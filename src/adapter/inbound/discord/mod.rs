//! Discord slash-command adapter.

mod handler;
pub mod options;
mod responder;
pub mod schema;

pub use handler::SignalHandler;
pub use options::{parse_command, CommandOptions, OptionValue};
pub use responder::InteractionResponder;
