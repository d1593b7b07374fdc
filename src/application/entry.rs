//! The `/entry` command: validate, calculate, format, fan out, summarise.

use tracing::info;

use super::acknowledgement::Acknowledgement;
use super::dispatch::dispatch;
use crate::domain::{calculate_levels, extract_destinations, format_signal, LevelSet, OTHER_PAIR};
use crate::error::{Result, UserError};
use crate::port::outbound::ChannelGateway;

/// Arguments of one `/entry` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRequest {
    /// Raw order type value, e.g. `buy_limit`.
    pub order_type: String,
    /// Pair choice, or `other` to use [`EntryRequest::custom_pair`].
    pub pair: String,
    pub price: f64,
    /// Free-form channel mentions or identifiers.
    pub channels: String,
    /// Appended verbatim below the signal.
    pub roles: String,
    pub custom_pair: Option<String>,
    pub decimals: Option<i64>,
}

/// A validated signal ready to be relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSignal {
    pub pair: String,
    pub levels: LevelSet,
    pub message: String,
    pub destinations: Vec<String>,
}

impl EntryRequest {
    /// Symbol the signal is for, taking the custom pair when `other` is
    /// selected.
    ///
    /// # Errors
    ///
    /// Returns a [`UserError`] when `other` is selected without a custom
    /// pair or without a decimal count.
    pub fn resolved_pair(&self) -> std::result::Result<String, UserError> {
        if self.pair != OTHER_PAIR {
            return Ok(self.pair.clone());
        }

        let custom = self
            .custom_pair
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(UserError::MissingCustomPair)?;
        if self.decimals.is_none() {
            return Err(UserError::MissingDecimals);
        }

        Ok(custom.to_uppercase())
    }

    /// Run every input check and build the outgoing message.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`UserError`], in order: custom pair,
    /// decimals, destinations, calculation.
    pub fn prepare(&self) -> std::result::Result<PreparedSignal, UserError> {
        let pair = self.resolved_pair()?;

        let destinations = extract_destinations(&self.channels);
        if destinations.is_empty() {
            return Err(UserError::NoDestinations);
        }

        let levels = calculate_levels(&pair, self.price, &self.order_type, self.decimals)
            .map_err(|_| UserError::Calculation)?;
        let message = format_signal(&pair, &self.order_type, &levels, &self.roles);

        Ok(PreparedSignal {
            pair,
            levels,
            message,
            destinations,
        })
    }
}

/// Handle an `/entry` invocation end to end.
///
/// # Errors
///
/// Only acknowledgement failures surface; per-destination problems end up in
/// the summary reply.
pub async fn run_entry<G: ChannelGateway>(
    gateway: &G,
    request: &EntryRequest,
    ack: &Acknowledgement<'_>,
) -> Result<()> {
    let signal = match request.prepare() {
        Ok(signal) => signal,
        Err(rejection) => {
            info!(pair = %request.pair, reason = %rejection, "Entry rejected");
            return ack.reply(&rejection.to_string()).await;
        }
    };

    info!(
        pair = %signal.pair,
        order_type = %request.order_type,
        entry = %signal.levels.entry,
        destinations = signal.destinations.len(),
        "Relaying trade signal"
    );

    ack.defer().await?;
    let report = dispatch(gateway, &signal.destinations, &signal.message).await;

    info!(
        delivered = report.delivered.len(),
        failed = report.failed.len(),
        "Trade signal relayed"
    );
    ack.reply(&report.summary("Signal")).await
}
