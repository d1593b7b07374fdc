//! The `/stats` command: relay a statistics summary to channels.

use tracing::info;

use super::acknowledgement::Acknowledgement;
use super::dispatch::dispatch;
use crate::domain::{extract_destinations, StatsSummary};
use crate::error::{Result, UserError};
use crate::port::outbound::ChannelGateway;

/// Arguments of one `/stats` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRequest {
    pub summary: StatsSummary,
    pub channels: String,
}

/// Handle a `/stats` invocation end to end.
///
/// # Errors
///
/// Only acknowledgement failures surface.
pub async fn run_stats<G: ChannelGateway>(
    gateway: &G,
    request: &StatsRequest,
    ack: &Acknowledgement<'_>,
) -> Result<()> {
    let destinations = extract_destinations(&request.channels);
    if destinations.is_empty() {
        return ack.reply(&UserError::NoDestinations.to_string()).await;
    }

    info!(
        period = %request.summary.date_range,
        destinations = destinations.len(),
        "Relaying statistics"
    );

    ack.defer().await?;
    let report = dispatch(gateway, &destinations, &request.summary.render()).await;
    ack.reply(&report.summary("Stats")).await
}
