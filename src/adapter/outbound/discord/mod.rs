//! Discord delivery through serenity.

mod gateway;

pub use gateway::DiscordGateway;
