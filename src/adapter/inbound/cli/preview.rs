//! Handler for the `preview` command: calculate and render a signal offline.

use serde_json::json;

use crate::adapter::inbound::cli::command::PreviewArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::{calculate_levels, format_signal, order_type_label};
use crate::error::Result;

/// Execute the preview command.
pub fn execute(args: &PreviewArgs) -> Result<()> {
    let pair = args.pair.trim().to_uppercase();
    let levels = calculate_levels(&pair, args.price, &args.order_type, args.decimals)?;
    let message = format_signal(&pair, &args.order_type, &levels, &args.roles);

    if output::is_json() {
        output::emit_json(
            "preview",
            json!({
                "pair": pair,
                "order_type": args.order_type,
                "decimals": levels.decimals,
                "entry": levels.entry.to_string(),
                "tp1": levels.tp1.to_string(),
                "tp2": levels.tp2.to_string(),
                "tp3": levels.tp3.to_string(),
                "sl": levels.sl.to_string(),
                "message": message,
            }),
        );
        return Ok(());
    }

    output::section("Levels");
    output::field("Pair", &pair);
    output::field("Type", order_type_label(&args.order_type));
    output::field("Entry", levels.entry);
    output::field("TP1", levels.tp1);
    output::field("TP2", levels.tp2);
    output::field("TP3", levels.tp3);
    output::field("SL", levels.sl);

    output::section("Message");
    output::block(&message);

    Ok(())
}
