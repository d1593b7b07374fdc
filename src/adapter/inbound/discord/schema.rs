//! Slash-command definitions registered with each guild.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::application::SlashCommand;
use crate::domain::{Instrument, OrderType, OTHER_PAIR};

/// Both command schemas, in registration order.
#[must_use]
pub fn commands() -> Vec<CreateCommand> {
    vec![entry_command(), stats_command()]
}

fn string_option(name: &str, description: &str, required: bool) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description).required(required)
}

fn integer_option(name: &str, description: &str, required: bool) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, name, description).required(required)
}

fn entry_command() -> CreateCommand {
    let order_type = OrderType::ALL.iter().fold(
        string_option("type", "Type of entry", true),
        |option, kind| option.add_string_choice(kind.label(), kind.as_str()),
    );

    let pair = Instrument::ALL
        .iter()
        .fold(string_option("pair", "Trading pair", true), |option, instrument| {
            option.add_string_choice(instrument.symbol(), instrument.symbol())
        })
        .add_string_choice("Other", OTHER_PAIR);

    CreateCommand::new(SlashCommand::ENTRY)
        .description("Create a new trading signal")
        .add_option(order_type)
        .add_option(pair)
        .add_option(
            CreateCommandOption::new(CommandOptionType::Number, "price", "Entry price")
                .required(true),
        )
        .add_option(string_option(
            "channels",
            "Channels to send the signal to (mention them or paste channel IDs)",
            true,
        ))
        .add_option(string_option("roles", "Roles to mention", true))
        .add_option(string_option(
            "custom_pair",
            "Custom trading pair (only when \"Other\" is selected)",
            false,
        ))
        .add_option(integer_option(
            "decimals",
            "Decimal places for the custom trading pair",
            false,
        ))
}

fn stats_command() -> CreateCommand {
    CreateCommand::new(SlashCommand::STATS)
        .description("Send trading statistics summary")
        .add_option(string_option("date_range", "Date range for the statistics", true))
        .add_option(integer_option("total_signals", "Total number of signals sent", true))
        .add_option(integer_option("tp1_hits", "Number of TP1 hits", true))
        .add_option(integer_option("tp2_hits", "Number of TP2 hits", true))
        .add_option(integer_option("tp3_hits", "Number of TP3 hits", true))
        .add_option(integer_option("sl_hits", "Number of SL hits", true))
        .add_option(string_option(
            "channels",
            "Channels to send the stats to (mention them or paste channel IDs)",
            true,
        ))
        .add_option(string_option(
            "currently_open",
            "Number of currently open trades",
            false,
        ))
        .add_option(integer_option(
            "total_closed",
            "Total closed trades (defaults to TP1 hits + SL hits)",
            false,
        ))
}
