//! Take-profit and stop-loss level calculation.
//!
//! Levels sit at fixed pip offsets from the entry: three take-profits at
//! 20, 50 and 100 pips and one stop loss at 50 pips on the opposite side.
//! All five prices share one decimal count chosen once per calculation.

use std::fmt;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use super::instrument::{PipSpec, MAX_DECIMALS};
use super::order::Direction;

pub const TP1_PIPS: u32 = 20;
pub const TP2_PIPS: u32 = 50;
pub const TP3_PIPS: u32 = 100;
pub const SL_PIPS: u32 = 50;

/// Why a level set could not be produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("entry price {0} is not a representable decimal")]
    InvalidPrice(f64),

    #[error("decimal count {0} is outside 0..={MAX_DECIMALS}")]
    DecimalsOutOfRange(i64),

    #[error("price arithmetic overflowed")]
    Overflow,
}

/// A price rounded to a fixed number of decimals, shown with a `$` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceLevel {
    pub value: Decimal,
    pub decimals: u32,
}

impl PriceLevel {
    fn rounded(value: Decimal, decimals: u32) -> Self {
        Self {
            value: value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero),
            decimals,
        }
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.*}", self.decimals as usize, self.value)
    }
}

/// Entry plus the derived take-profit and stop-loss prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelSet {
    pub entry: PriceLevel,
    pub tp1: PriceLevel,
    pub tp2: PriceLevel,
    pub tp3: PriceLevel,
    pub sl: PriceLevel,
    pub decimals: u32,
}

impl LevelSet {
    /// All five levels in display order: entry, tp1, tp2, tp3, sl.
    #[must_use]
    pub fn all(&self) -> [PriceLevel; 5] {
        [self.entry, self.tp1, self.tp2, self.tp3, self.sl]
    }
}

/// Compute the level set for a signal.
///
/// `pair` is matched case-insensitively against the instrument table;
/// `custom_decimals` only applies to symbols outside it.
pub fn calculate_levels(
    pair: &str,
    entry_price: f64,
    order_type: &str,
    custom_decimals: Option<i64>,
) -> Result<LevelSet, CalcError> {
    compute(pair, entry_price, order_type, custom_decimals).map_err(|e| {
        warn!(pair, entry_price, order_type, error = %e, "Level calculation failed");
        e
    })
}

fn compute(
    pair: &str,
    entry_price: f64,
    order_type: &str,
    custom_decimals: Option<i64>,
) -> Result<LevelSet, CalcError> {
    let spec = PipSpec::for_symbol(pair, custom_decimals)
        .ok_or(CalcError::DecimalsOutOfRange(custom_decimals.unwrap_or_default()))?;

    let entry = if entry_price.is_finite() {
        Decimal::from_f64(entry_price)
    } else {
        None
    }
    .ok_or(CalcError::InvalidPrice(entry_price))?;

    let sign = match Direction::of(order_type) {
        Direction::Buy => Decimal::ONE,
        Direction::Sell => Decimal::NEGATIVE_ONE,
    };

    let offset = |pips: u32| -> Result<Decimal, CalcError> {
        entry
            .checked_add(sign * spec.distance(pips))
            .ok_or(CalcError::Overflow)
    };
    let stop = entry
        .checked_sub(sign * spec.distance(SL_PIPS))
        .ok_or(CalcError::Overflow)?;

    let d = spec.decimals;
    Ok(LevelSet {
        entry: PriceLevel::rounded(entry, d),
        tp1: PriceLevel::rounded(offset(TP1_PIPS)?, d),
        tp2: PriceLevel::rounded(offset(TP2_PIPS)?, d),
        tp3: PriceLevel::rounded(offset(TP3_PIPS)?, d),
        sl: PriceLevel::rounded(stop, d),
        decimals: d,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::Instrument;
    use crate::domain::order::OrderType;
    use rust_decimal_macros::dec;

    fn rendered(levels: &LevelSet) -> [String; 5] {
        levels.all().map(|l| l.to_string())
    }

    #[test]
    fn eurusd_buy_limit() {
        let levels = calculate_levels("EURUSD", 1.2345, "buy_limit", None).unwrap();
        assert_eq!(
            rendered(&levels),
            ["$1.2345", "$1.2365", "$1.2395", "$1.2445", "$1.2295"]
        );
        assert_eq!(levels.decimals, 4);
    }

    #[test]
    fn xauusd_sell_execution() {
        let levels = calculate_levels("XAUUSD", 2995.50, "sell_execution", None).unwrap();
        assert_eq!(
            rendered(&levels),
            ["$2995.50", "$2993.50", "$2990.50", "$2985.50", "$3000.50"]
        );
    }

    #[test]
    fn custom_symbol_rounds_at_low_precision() {
        let levels = calculate_levels("FOO", 10.0, "buy_limit", Some(1)).unwrap();
        assert_eq!(levels.decimals, 1);
        assert_eq!(levels.entry.to_string(), "$10.0");
        assert_eq!(levels.tp1.to_string(), "$10.0");
        assert_eq!(levels.sl.to_string(), "$10.0");
        assert_eq!(levels.tp3.value, dec!(10.0));
    }

    #[test]
    fn lowercase_pair_uses_table() {
        let levels = calculate_levels("usdjpy", 150.0, "buy_execution", Some(1)).unwrap();
        assert_eq!(levels.decimals, 3);
        assert_eq!(levels.tp1.to_string(), "$150.200");
    }

    #[test]
    fn ordering_holds_for_every_pair_and_type() {
        let entries = [0.65432, 1.2345, 150.25, 2995.5, 18000.0];

        for instrument in Instrument::ALL {
            for order_type in OrderType::ALL {
                for entry in entries {
                    let l = calculate_levels(instrument.symbol(), entry, order_type.as_str(), None)
                        .unwrap();
                    let e = l.entry.value;
                    match order_type.direction() {
                        Direction::Buy => {
                            assert!(e < l.tp1.value, "{instrument} {order_type} {entry}");
                            assert!(l.tp1.value < l.tp2.value);
                            assert!(l.tp2.value < l.tp3.value);
                            assert!(l.sl.value < e);
                        }
                        Direction::Sell => {
                            assert!(e > l.tp1.value, "{instrument} {order_type} {entry}");
                            assert!(l.tp1.value > l.tp2.value);
                            assert!(l.tp2.value > l.tp3.value);
                            assert!(l.sl.value > e);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn all_levels_share_table_precision() {
        for instrument in Instrument::ALL {
            let l = calculate_levels(instrument.symbol(), 1.5, "sell_limit", None).unwrap();
            let expected = instrument.pip_spec().decimals;
            assert_eq!(l.decimals, expected);
            for level in l.all() {
                assert_eq!(level.decimals, expected);
                let text = level.to_string();
                let fraction = text.split_once('.').map_or(0, |(_, f)| f.len());
                assert_eq!(fraction as u32, expected, "{instrument}: {text}");
            }
        }
    }

    #[test]
    fn zero_custom_decimals_fall_back_to_default_precision() {
        let l = calculate_levels("FOO", 42.0, "sell_limit", Some(0)).unwrap();
        assert_eq!(l.decimals, 4);
        assert_eq!(
            rendered(&l),
            ["$42.0000", "$41.9980", "$41.9950", "$41.9900", "$42.0050"]
        );
    }

    #[test]
    fn non_finite_prices_fail() {
        assert_eq!(
            calculate_levels("EURUSD", f64::INFINITY, "buy_limit", None),
            Err(CalcError::InvalidPrice(f64::INFINITY))
        );
        assert!(matches!(
            calculate_levels("EURUSD", f64::NAN, "buy_limit", None),
            Err(CalcError::InvalidPrice(_))
        ));
    }

    #[test]
    fn out_of_range_decimals_fail() {
        assert_eq!(
            calculate_levels("FOO", 1.0, "buy_limit", Some(-2)),
            Err(CalcError::DecimalsOutOfRange(-2))
        );
        assert_eq!(
            calculate_levels("FOO", 1.0, "buy_limit", Some(40)),
            Err(CalcError::DecimalsOutOfRange(40))
        );
    }

    #[test]
    fn unknown_type_without_buy_is_a_sell() {
        let l = calculate_levels("EURUSD", 1.0, "short", None).unwrap();
        assert!(l.tp1.value < l.entry.value);
    }
}
