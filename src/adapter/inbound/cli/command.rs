//! Command-line interface definitions.
//!
//! `run` starts the Discord bot; `preview` renders a signal offline; `check`
//! validates configuration without connecting.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Discord trade-signal bot
#[derive(Parser, Debug)]
#[command(name = "signalcast")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to Discord and serve slash commands
    Run(ConfigPathArg),

    /// Calculate and render a signal without sending it
    Preview(PreviewArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

impl Commands {
    /// Subcommand path as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Run(_) => "run",
            Self::Preview(_) => "preview",
            Self::Check(CheckCommand::Config(_)) => "check config",
        }
    }
}

/// Subcommands for `signalcast check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file and report credential presence.
    Config(ConfigPathArg),
}

/// Shared argument struct for commands that only need a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file. A missing file means defaults.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `preview` subcommand.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Trading pair symbol (e.g. EURUSD, XAUUSD, or any custom symbol)
    pub pair: String,

    /// Entry price
    #[arg(allow_negative_numbers = true)]
    pub price: f64,

    /// Order type (buy_limit, sell_limit, buy_execution, sell_execution)
    #[arg(value_name = "TYPE")]
    pub order_type: String,

    /// Decimal places for pairs outside the built-in table
    #[arg(long)]
    pub decimals: Option<i64>,

    /// Role mentions appended to the message
    #[arg(long, default_value = "")]
    pub roles: String,
}
