//! Counter state: value, auto-increment flag and interval.
//!
//! The holder is UI-agnostic. The presentation layer reads snapshots (or
//! subscribes to them) and calls the mutation methods in response to input.

mod holder;
mod interval;
mod snapshot;

pub use holder::{CounterHolder, MIN_INTERVAL};
pub use interval::IntervalRange;
pub use snapshot::CounterSnapshot;
