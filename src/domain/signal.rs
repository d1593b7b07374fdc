//! Signal message rendering.

use super::levels::LevelSet;
use super::order::order_type_label;

/// Render the message relayed to every destination channel.
///
/// `roles` is appended verbatim as the last line.
#[must_use]
pub fn format_signal(pair: &str, order_type: &str, levels: &LevelSet, roles: &str) -> String {
    format!(
        "**Trade signal for: {pair}**\n\
        Entry Type: {label}\n\
        Entry Price: {entry}\n\
        \n\
        **Take Profit Levels:**\n\
        TP1: {tp1}\n\
        TP2: {tp2}\n\
        TP3: {tp3}\n\
        \n\
        Stop Loss: {sl}\n\
        \n\
        {roles}",
        pair = pair.to_uppercase(),
        label = order_type_label(order_type),
        entry = levels.entry,
        tp1 = levels.tp1,
        tp2 = levels.tp2,
        tp3 = levels.tp3,
        sl = levels.sl,
    )
}
