//! Canonical command requests for tests.

use crate::application::{EntryRequest, StatsRequest};
use crate::domain::StatsSummary;

/// A valid EURUSD buy-limit entry aimed at `channels`.
#[must_use]
pub fn entry(channels: &str) -> EntryRequest {
    EntryRequest {
        order_type: "buy_limit".to_string(),
        pair: "EURUSD".to_string(),
        price: 1.2345,
        channels: channels.to_string(),
        roles: "@signals".to_string(),
        custom_pair: None,
        decimals: None,
    }
}

/// A week of statistics aimed at `channels`.
#[must_use]
pub fn stats(channels: &str) -> StatsRequest {
    StatsRequest {
        summary: StatsSummary {
            date_range: "Week 1".to_string(),
            total_signals: 10,
            tp1_hits: 7,
            tp2_hits: 5,
            tp3_hits: 2,
            sl_hits: 3,
            currently_open: "0".to_string(),
            total_closed: None,
        },
        channels: channels.to_string(),
    }
}
