//! Bounds and step size for the auto-increment interval.

use std::time::Duration;

/// Inclusive interval range with a fixed step, in milliseconds.
///
/// The settings slider moves in `step` increments between `min` and `max`.
/// Config validation checks the initial interval against the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalRange {
    min_ms: u64,
    max_ms: u64,
    step_ms: u64,
}

impl IntervalRange {
    pub const DEFAULT_MIN_MS: u64 = 1_000;
    pub const DEFAULT_MAX_MS: u64 = 10_000;
    pub const DEFAULT_STEP_MS: u64 = 1_000;

    /// Build a range. Returns `None` if the bounds are inverted, the step is
    /// zero, the minimum is zero, or the span is not a multiple of the step.
    pub fn new(min_ms: u64, max_ms: u64, step_ms: u64) -> Option<Self> {
        if min_ms == 0 || step_ms == 0 || min_ms > max_ms {
            return None;
        }
        if (max_ms - min_ms) % step_ms != 0 {
            return None;
        }
        Some(Self {
            min_ms,
            max_ms,
            step_ms,
        })
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }

    /// Number of discrete positions on the grid (10 for 1s..=10s by 1s).
    pub fn positions(&self) -> u64 {
        (self.max_ms - self.min_ms) / self.step_ms + 1
    }

    pub fn contains(&self, interval: Duration) -> bool {
        let ms = millis(interval);
        ms >= self.min_ms && ms <= self.max_ms
    }

    /// Clamp into the range and round to the nearest step.
    pub fn snap(&self, interval: Duration) -> Duration {
        let ms = millis(interval).clamp(self.min_ms, self.max_ms);
        let offset = ms - self.min_ms;
        let steps = (offset + self.step_ms / 2) / self.step_ms;
        let snapped = (self.min_ms + steps * self.step_ms).min(self.max_ms);
        Duration::from_millis(snapped)
    }

    /// One step up, saturating at `max`.
    pub fn step_up(&self, interval: Duration) -> Duration {
        let current = millis(self.snap(interval));
        Duration::from_millis(current.saturating_add(self.step_ms).min(self.max_ms))
    }

    /// One step down, saturating at `min`.
    pub fn step_down(&self, interval: Duration) -> Duration {
        let current = millis(self.snap(interval));
        Duration::from_millis(current.saturating_sub(self.step_ms).max(self.min_ms))
    }
}

impl Default for IntervalRange {
    fn default() -> Self {
        Self {
            min_ms: Self::DEFAULT_MIN_MS,
            max_ms: Self::DEFAULT_MAX_MS,
            step_ms: Self::DEFAULT_STEP_MS,
        }
    }
}

fn millis(interval: Duration) -> u64 {
    u64::try_from(interval.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn default_range_has_ten_positions() {
        let range = IntervalRange::default();
        assert_eq!(range.positions(), 10);
        assert_eq!(range.min(), ms(1_000));
        assert_eq!(range.max(), ms(10_000));
    }

    #[test]
    fn new_rejects_bad_bounds() {
        assert!(IntervalRange::new(0, 10_000, 1_000).is_none());
        assert!(IntervalRange::new(1_000, 10_000, 0).is_none());
        assert!(IntervalRange::new(5_000, 1_000, 1_000).is_none());
        assert!(IntervalRange::new(1_000, 10_500, 1_000).is_none());
        assert!(IntervalRange::new(500, 2_000, 500).is_some());
    }

    #[test]
    fn snap_clamps_and_rounds() {
        let range = IntervalRange::default();
        assert_eq!(range.snap(ms(0)), ms(1_000));
        assert_eq!(range.snap(ms(60_000)), ms(10_000));
        assert_eq!(range.snap(ms(3_000)), ms(3_000));
        assert_eq!(range.snap(ms(3_499)), ms(3_000));
        assert_eq!(range.snap(ms(3_500)), ms(4_000));
    }

    #[test]
    fn stepping_saturates_at_bounds() {
        let range = IntervalRange::default();
        assert_eq!(range.step_up(ms(3_000)), ms(4_000));
        assert_eq!(range.step_up(ms(10_000)), ms(10_000));
        assert_eq!(range.step_down(ms(3_000)), ms(2_000));
        assert_eq!(range.step_down(ms(1_000)), ms(1_000));
    }

    #[test]
    fn contains_is_inclusive() {
        let range = IntervalRange::default();
        assert!(range.contains(ms(1_000)));
        assert!(range.contains(ms(10_000)));
        assert!(!range.contains(ms(999)));
        assert!(!range.contains(ms(10_001)));
    }
}
