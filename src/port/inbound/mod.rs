//! Inbound ports (driving side): surfaces the command adapters hand to the
//! application.

pub mod interaction;

pub use interaction::Responder;
