use thiserror::Error;

use crate::domain::levels::CalcError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Input problems reported back to the invoking user.
///
/// The display text is the exact ephemeral reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Please provide a custom trading pair when selecting \"Other\".")]
    MissingCustomPair,

    #[error("Please provide the number of decimals for your custom trading pair.")]
    MissingDecimals,

    #[error("Please mention at least one channel (e.g., #channel1 #channel2) or provide channel IDs.")]
    NoDestinations,

    #[error("Error calculating pip levels. Please check your input.")]
    Calculation,
}

/// Failures talking to the chat platform for a single destination.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("invalid channel id")]
    InvalidChannelId,

    #[error("{0}")]
    Request(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("interaction already acknowledged")]
    AlreadyAcknowledged,

    #[error("invalid command option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "discord")]
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for a missing required command option.
    #[must_use]
    pub fn missing_option(name: &'static str) -> Self {
        Self::InvalidOption {
            name,
            reason: "missing".to_string(),
        }
    }
}
