//! Platform-agnostic signal logic: instruments, levels and message text.

pub mod destination;
pub mod instrument;
pub mod levels;
pub mod order;
pub mod signal;
pub mod stats;

pub use destination::extract_destinations;
pub use instrument::{Instrument, PipSpec, OTHER_PAIR};
pub use levels::{calculate_levels, CalcError, LevelSet, PriceLevel};
pub use order::{order_type_label, Direction, OrderType};
pub use signal::format_signal;
pub use stats::StatsSummary;
