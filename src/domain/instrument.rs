//! Pip sizes and display precision for the supported instruments.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Pip value used for symbols outside the known table.
pub const DEFAULT_PIP_VALUE: Decimal = dec!(0.0001);

/// Decimal places used for unknown symbols when none are supplied.
pub const DEFAULT_DECIMALS: u32 = 4;

/// Largest decimal count a custom symbol may request.
pub const MAX_DECIMALS: u32 = 28;

/// Pair value that selects a user-supplied symbol.
pub const OTHER_PAIR: &str = "other";

/// Instruments with fixed pip constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    Xauusd,
    Us500,
    Usdjpy,
    Gbpjpy,
    Eurusd,
    Gbpusd,
    Audusd,
    Nzdusd,
    Us100,
}

impl Instrument {
    /// Every known instrument, in the order they are offered as choices.
    pub const ALL: [Instrument; 9] = [
        Instrument::Xauusd,
        Instrument::Gbpjpy,
        Instrument::Usdjpy,
        Instrument::Gbpusd,
        Instrument::Eurusd,
        Instrument::Audusd,
        Instrument::Nzdusd,
        Instrument::Us100,
        Instrument::Us500,
    ];

    /// Look up a symbol, case-insensitively.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let upper = symbol.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|i| i.symbol() == upper)
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Xauusd => "XAUUSD",
            Self::Us500 => "US500",
            Self::Usdjpy => "USDJPY",
            Self::Gbpjpy => "GBPJPY",
            Self::Eurusd => "EURUSD",
            Self::Gbpusd => "GBPUSD",
            Self::Audusd => "AUDUSD",
            Self::Nzdusd => "NZDUSD",
            Self::Us100 => "US100",
        }
    }

    #[must_use]
    pub const fn pip_spec(self) -> PipSpec {
        match self {
            Self::Xauusd | Self::Us500 => PipSpec::new(dec!(0.1), 2),
            Self::Usdjpy | Self::Gbpjpy => PipSpec::new(dec!(0.01), 3),
            Self::Eurusd | Self::Gbpusd => PipSpec::new(dec!(0.0001), 4),
            Self::Audusd | Self::Nzdusd => PipSpec::new(dec!(0.0001), 5),
            Self::Us100 => PipSpec::new(dec!(1), 1),
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Size of one pip and the number of decimals prices are shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipSpec {
    pub pip_value: Decimal,
    pub decimals: u32,
}

impl PipSpec {
    #[must_use]
    pub const fn new(pip_value: Decimal, decimals: u32) -> Self {
        Self {
            pip_value,
            decimals,
        }
    }

    /// Resolve the pip spec for any symbol.
    ///
    /// Known symbols always use their table entry. Anything else falls back to
    /// [`DEFAULT_PIP_VALUE`] with `custom_decimals`, or [`DEFAULT_DECIMALS`]
    /// when none or zero were given. Returns `None` when the custom count is
    /// negative or above [`MAX_DECIMALS`].
    #[must_use]
    pub fn for_symbol(symbol: &str, custom_decimals: Option<i64>) -> Option<Self> {
        if let Some(instrument) = Instrument::from_symbol(symbol) {
            return Some(instrument.pip_spec());
        }

        let decimals = match custom_decimals {
            None | Some(0) => DEFAULT_DECIMALS,
            Some(d) => u32::try_from(d).ok().filter(|d| *d <= MAX_DECIMALS)?,
        };

        Some(Self::new(DEFAULT_PIP_VALUE, decimals))
    }

    /// Price distance covered by `pips` pips.
    #[must_use]
    pub fn distance(&self, pips: u32) -> Decimal {
        self.pip_value * Decimal::from(pips)
    }
}
