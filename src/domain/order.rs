//! Entry order types and trade direction.

use std::fmt;
use std::str::FromStr;

/// The four entry types offered by the `/entry` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    BuyLimit,
    SellLimit,
    BuyExecution,
    SellExecution,
}

impl OrderType {
    pub const ALL: [OrderType; 4] = [
        OrderType::BuyLimit,
        OrderType::SellLimit,
        OrderType::BuyExecution,
        OrderType::SellExecution,
    ];

    /// Wire value sent by the platform.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BuyLimit => "buy_limit",
            Self::SellLimit => "sell_limit",
            Self::BuyExecution => "buy_execution",
            Self::SellExecution => "sell_execution",
        }
    }

    /// Human-readable label used in signal messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BuyLimit => "Buy limit",
            Self::SellLimit => "Sell limit",
            Self::BuyExecution => "Buy execution",
            Self::SellExecution => "Sell execution",
        }
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::BuyLimit | Self::BuyExecution => Direction::Buy,
            Self::SellLimit | Self::SellExecution => Direction::Sell,
        }
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of the trade; decides which way the offsets point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    /// Classify a raw order type string.
    ///
    /// Known types map through [`OrderType::direction`]; any other string is a
    /// buy when it contains `"buy"`.
    #[must_use]
    pub fn of(order_type: &str) -> Self {
        match order_type.parse::<OrderType>() {
            Ok(known) => known.direction(),
            Err(_) if order_type.contains("buy") => Self::Buy,
            Err(_) => Self::Sell,
        }
    }
}

/// Display label for a raw order type, passing unknown values through.
#[must_use]
pub fn order_type_label(order_type: &str) -> &str {
    order_type
        .parse::<OrderType>()
        .map_or(order_type, |t| t.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_values() {
        for t in OrderType::ALL {
            assert_eq!(t.as_str().parse::<OrderType>(), Ok(t));
        }
        assert!("Buy limit".parse::<OrderType>().is_err());
    }

    #[test]
    fn buy_variants_point_up() {
        assert_eq!(Direction::of("buy_limit"), Direction::Buy);
        assert_eq!(Direction::of("buy_execution"), Direction::Buy);
        assert_eq!(Direction::of("sell_limit"), Direction::Sell);
        assert_eq!(Direction::of("sell_execution"), Direction::Sell);
    }

    #[test]
    fn unknown_types_fall_back_to_substring_match() {
        assert_eq!(Direction::of("buy_stop"), Direction::Buy);
        assert_eq!(Direction::of("short"), Direction::Sell);
        // Case-sensitive, like the wire values.
        assert_eq!(Direction::of("BUY"), Direction::Sell);
    }

    #[test]
    fn labels_pass_unknown_values_through() {
        assert_eq!(order_type_label("sell_execution"), "Sell execution");
        assert_eq!(order_type_label("scalp"), "scalp");
    }
}
