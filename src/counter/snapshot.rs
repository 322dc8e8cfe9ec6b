use std::time::Duration;

/// Observable state of the counter, as seen by subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub count: i64,
    pub auto_increment: bool,
    pub interval: Duration,
}

impl CounterSnapshot {
    pub fn new(interval: Duration) -> Self {
        Self {
            count: 0,
            auto_increment: false,
            interval,
        }
    }

    /// Interval in seconds, for display.
    pub fn interval_secs(&self) -> f64 {
        self.interval.as_secs_f64()
    }

    /// "ON" / "OFF" label for the auto-increment switch.
    pub fn auto_label(&self) -> &'static str {
        if self.auto_increment {
            "ON"
        } else {
            "OFF"
        }
    }
}
