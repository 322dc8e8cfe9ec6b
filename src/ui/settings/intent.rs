use std::time::Duration;

use crate::counter::IntervalRange;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    /// Show the screen with the slider at the holder's interval.
    Open {
        interval: Duration,
        range: IntervalRange,
    },
    /// Done: back to the counter screen. An unapplied slider move is dropped.
    Close,
    StepUp,
    StepDown,
    /// Slider released; the caller has applied `position` to the holder.
    Commit,
    /// Holder interval changed; move the slider to it.
    Sync { interval: Duration },
}

impl Intent for SettingsIntent {}
