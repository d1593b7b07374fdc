//! Trading statistics summary for the `/stats` command.

use rust_decimal::{Decimal, RoundingStrategy};

/// Hit counts for one reporting period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    pub date_range: String,
    pub total_signals: i64,
    pub tp1_hits: i64,
    pub tp2_hits: i64,
    pub tp3_hits: i64,
    pub sl_hits: i64,
    pub currently_open: String,
    pub total_closed: Option<i64>,
}

impl StatsSummary {
    /// Closed positions, defaulting to TP1 hits plus SL hits.
    #[must_use]
    pub fn total_closed(&self) -> i64 {
        self.total_closed
            .unwrap_or_else(|| self.tp1_hits.saturating_add(self.sl_hits))
    }

    /// Win rate, measured as the TP1 hit percentage.
    #[must_use]
    pub fn win_rate(&self) -> String {
        percentage(self.tp1_hits, self.total_closed())
    }

    #[must_use]
    pub fn sl_rate(&self) -> String {
        percentage(self.sl_hits, self.total_closed())
    }

    /// Render the message relayed to every destination channel.
    #[must_use]
    pub fn render(&self) -> String {
        const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

        format!(
            "**:bar_chart: TRADING SIGNAL STATISTICS**\n\
            {RULE}\n\
            **:date: Period:** {date_range}\n\
            \n\
            **:chart_with_upwards_trend: SIGNAL OVERVIEW**\n\
            • Total Signals Sent: **{total_signals}**\n\
            • Total Closed Positions: **{total_closed}**\n\
            • Currently Open: **{currently_open}**\n\
            \n\
            **:dart: TAKE PROFIT PERFORMANCE**\n\
            • TP1 Hits: **{tp1}**\n\
            • TP2 Hits: **{tp2}**\n\
            • TP3 Hits: **{tp3}**\n\
            \n\
            **:octagonal_sign: STOP LOSS**\n\
            • SL Hits: **{sl}** ({sl_rate})\n\
            \n\
            **:bar_chart: PERFORMANCE SUMMARY**\n\
            • **Win Rate:** {win_rate}\n\
            {RULE}",
            date_range = self.date_range,
            total_signals = self.total_signals,
            total_closed = self.total_closed(),
            currently_open = self.currently_open,
            tp1 = self.tp1_hits,
            tp2 = self.tp2_hits,
            tp3 = self.tp3_hits,
            sl = self.sl_hits,
            sl_rate = self.sl_rate(),
            win_rate = self.win_rate(),
        )
    }
}

/// Whole-number percentage, half-to-even; `0%` for an empty denominator.
fn percentage(hits: i64, total: i64) -> String {
    if total <= 0 {
        return "0%".to_string();
    }

    let pct = Decimal::from(hits) * Decimal::ONE_HUNDRED / Decimal::from(total);
    format!(
        "{}%",
        pct.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> StatsSummary {
        StatsSummary {
            date_range: "1-7 June".to_string(),
            total_signals: 12,
            tp1_hits: 6,
            tp2_hits: 4,
            tp3_hits: 1,
            sl_hits: 3,
            currently_open: "2".to_string(),
            total_closed: None,
        }
    }

    #[test]
    fn total_closed_defaults_to_tp1_plus_sl() {
        assert_eq!(summary().total_closed(), 9);

        let explicit = StatsSummary {
            total_closed: Some(10),
            ..summary()
        };
        assert_eq!(explicit.total_closed(), 10);
    }

    #[test]
    fn percentages_round_to_whole_numbers() {
        let s = summary();
        assert_eq!(s.win_rate(), "67%");
        assert_eq!(s.sl_rate(), "33%");

        assert_eq!(percentage(1, 8), "12%");
        assert_eq!(percentage(3, 8), "38%");
    }

    #[test]
    fn empty_denominator_is_zero_percent() {
        assert_eq!(percentage(5, 0), "0%");
        assert_eq!(percentage(5, -1), "0%");
    }

    #[test]
    fn render_includes_counts_and_rates() {
        let text = summary().render();
        assert!(text.contains("**:date: Period:** 1-7 June"));
        assert!(text.contains("• Total Closed Positions: **9**"));
        assert!(text.contains("• SL Hits: **3** (33%)"));
        assert!(text.contains("• **Win Rate:** 67%"));
        assert!(text.ends_with("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"));
    }
}
