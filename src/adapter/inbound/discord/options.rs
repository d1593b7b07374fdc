//! Slash-command option parsing.
//!
//! Options are first copied out of the platform payload into
//! [`CommandOptions`], then read into typed requests here.

use crate::application::{EntryRequest, SlashCommand, StatsRequest};
use crate::domain::StatsSummary;
use crate::error::{Error, Result};

/// A single option value as delivered by the platform.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Number(f64),
    Integer(i64),
    Unsupported,
}

/// Named option values of one invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOptions {
    values: Vec<(String, OptionValue)>,
}

impl CommandOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: OptionValue) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: &str, value: OptionValue) {
        self.values.push((name.to_string(), value));
    }

    fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    fn string(&self, name: &'static str) -> Result<Option<String>> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(wrong_type(name, "string", other)),
        }
    }

    fn required_string(&self, name: &'static str) -> Result<String> {
        self.string(name)?.ok_or_else(|| Error::missing_option(name))
    }

    fn integer(&self, name: &'static str) -> Result<Option<i64>> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Integer(i)) => Ok(Some(*i)),
            Some(other) => Err(wrong_type(name, "integer", other)),
        }
    }

    fn required_integer(&self, name: &'static str) -> Result<i64> {
        self.integer(name)?.ok_or_else(|| Error::missing_option(name))
    }

    fn required_number(&self, name: &'static str) -> Result<f64> {
        match self.get(name) {
            None => Err(Error::missing_option(name)),
            Some(OptionValue::Number(n)) => Ok(*n),
            #[allow(clippy::cast_precision_loss)]
            Some(OptionValue::Integer(i)) => Ok(*i as f64),
            Some(other) => Err(wrong_type(name, "number", other)),
        }
    }
}

fn wrong_type(name: &'static str, expected: &str, got: &OptionValue) -> Error {
    Error::InvalidOption {
        name,
        reason: format!("expected {expected}, got {got:?}"),
    }
}

/// Build the typed command for an invocation of `name`.
///
/// # Errors
///
/// Returns [`Error::UnknownCommand`] for names other than `entry` and
/// `stats`, or [`Error::InvalidOption`] when a required option is missing or
/// has the wrong type.
pub fn parse_command(name: &str, options: &CommandOptions) -> Result<SlashCommand> {
    match name {
        SlashCommand::ENTRY => parse_entry(options).map(SlashCommand::Entry),
        SlashCommand::STATS => parse_stats(options).map(SlashCommand::Stats),
        other => Err(Error::UnknownCommand(other.to_string())),
    }
}

fn parse_entry(options: &CommandOptions) -> Result<EntryRequest> {
    Ok(EntryRequest {
        order_type: options.required_string("type")?,
        pair: options.required_string("pair")?,
        price: options.required_number("price")?,
        channels: options.required_string("channels")?,
        roles: options.required_string("roles")?,
        custom_pair: options.string("custom_pair")?,
        decimals: options.integer("decimals")?,
    })
}

fn parse_stats(options: &CommandOptions) -> Result<StatsRequest> {
    let summary = StatsSummary {
        date_range: options.required_string("date_range")?,
        total_signals: options.required_integer("total_signals")?,
        tp1_hits: options.required_integer("tp1_hits")?,
        tp2_hits: options.required_integer("tp2_hits")?,
        tp3_hits: options.required_integer("tp3_hits")?,
        sl_hits: options.required_integer("sl_hits")?,
        currently_open: options
            .string("currently_open")?
            .unwrap_or_else(|| "0".to_string()),
        total_closed: options.integer("total_closed")?,
    };

    Ok(StatsRequest {
        summary,
        channels: options.required_string("channels")?,
    })
}
