//! Counter state holder with an optional auto-increment task.
//!
//! All mutations go through the `watch` sender's write lock, so calls from
//! the UI thread and ticks from the background task are serialized. The task
//! slot is guarded separately so that flipping the flag and spawning or
//! aborting the task happen as one step.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::interval::IntervalRange;
use super::snapshot::CounterSnapshot;

/// Shortest interval the ticker sleeps for. A zero interval would spin.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// State shared between the holder and its ticker task.
struct Shared {
    state: watch::Sender<CounterSnapshot>,
    /// Bumped under the state lock whenever the running ticker is replaced
    /// or stopped. A ticker only mutates while its generation is current.
    generation: AtomicU64,
}

impl Shared {
    fn add(&self, delta: i64) {
        self.state
            .send_modify(|state| state.count = state.count.wrapping_add(delta));
    }

    /// Apply one auto-increment tick. Returns false if the ticker is stale.
    fn tick(&self, generation: u64) -> bool {
        let mut current = true;
        self.state.send_if_modified(|state| {
            if !state.auto_increment || self.generation.load(Ordering::SeqCst) != generation {
                current = false;
                return false;
            }
            state.count = state.count.wrapping_add(1);
            true
        });
        current
    }

    fn interval(&self) -> Duration {
        self.state.borrow().interval
    }
}

/// Owns the counter, the auto-increment flag and interval, and at most one
/// periodic ticker task.
///
/// Invariant: the ticker slot is occupied iff `auto_increment` is true.
/// Dropping the holder aborts any live ticker.
pub struct CounterHolder {
    shared: Arc<Shared>,
    ticker: Mutex<Option<JoinHandle<()>>>,
    runtime: Handle,
    range: IntervalRange,
}

impl CounterHolder {
    /// Create a holder whose ticker runs on `runtime`.
    ///
    /// `range` bounds the settings slider; the interval itself is stored as
    /// given, floored at [`MIN_INTERVAL`].
    pub fn new(runtime: Handle, range: IntervalRange, interval: Duration) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        let (state, _) = watch::channel(CounterSnapshot::new(interval));
        tracing::debug!(interval_ms = interval.as_millis() as u64, "counter holder created");
        Self {
            shared: Arc::new(Shared {
                state,
                generation: AtomicU64::new(0),
            }),
            ticker: Mutex::new(None),
            runtime,
            range,
        }
    }

    /// Bounds and step of the settings slider.
    pub fn range(&self) -> IntervalRange {
        self.range
    }

    /// Current state.
    pub fn snapshot(&self) -> CounterSnapshot {
        *self.shared.state.borrow()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver's `borrow()` yields the current snapshot right away and
    /// `changed()` resolves on every later mutation. Dropping it unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<CounterSnapshot> {
        self.shared.state.subscribe()
    }

    pub fn increment(&self) {
        self.shared.add(1);
    }

    pub fn decrement(&self) {
        self.shared.add(-1);
    }

    pub fn reset(&self) {
        self.shared.state.send_modify(|state| state.count = 0);
    }

    /// Turn auto-increment on or off. Setting the current value is a no-op.
    ///
    /// Once a call that disables returns, no further tick can land, even one
    /// whose sleep had already elapsed.
    pub fn set_auto_increment(&self, enabled: bool) {
        let mut ticker = self.ticker.lock();
        let changed = self.shared.state.send_if_modified(|state| {
            if state.auto_increment == enabled {
                return false;
            }
            state.auto_increment = enabled;
            self.shared.generation.fetch_add(1, Ordering::SeqCst);
            true
        });
        if !changed {
            return;
        }

        if let Some(old) = ticker.take() {
            old.abort();
        }
        if enabled {
            *ticker = Some(self.spawn_ticker());
            tracing::info!("auto-increment enabled");
        } else {
            tracing::info!("auto-increment disabled");
        }
    }

    /// Store a new interval. If auto-increment is on, the ticker restarts so
    /// the next tick lands one new interval from now.
    ///
    /// The value is stored unchanged apart from the [`MIN_INTERVAL`] floor.
    pub fn set_interval(&self, interval: Duration) {
        let interval = interval.max(MIN_INTERVAL);
        let mut ticker = self.ticker.lock();
        let mut restart = false;
        self.shared.state.send_modify(|state| {
            state.interval = interval;
            if state.auto_increment {
                self.shared.generation.fetch_add(1, Ordering::SeqCst);
                restart = true;
            }
        });
        tracing::debug!(interval_ms = interval.as_millis() as u64, restart, "interval updated");

        if restart {
            if let Some(old) = ticker.take() {
                old.abort();
            }
            *ticker = Some(self.spawn_ticker());
        }
    }

    /// True while a ticker task is held.
    pub fn has_ticker(&self) -> bool {
        self.ticker.lock().is_some()
    }

    /// Stop auto-increment and release the ticker. Safe to call repeatedly.
    pub fn shutdown(&self) {
        let mut ticker = self.ticker.lock();
        self.shared.state.send_if_modified(|state| {
            self.shared.generation.fetch_add(1, Ordering::SeqCst);
            let was_on = state.auto_increment;
            state.auto_increment = false;
            was_on
        });
        if let Some(old) = ticker.take() {
            old.abort();
            tracing::debug!("ticker cancelled on shutdown");
        }
    }

    /// Must be called with the ticker slot locked.
    fn spawn_ticker(&self) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let generation = shared.generation.load(Ordering::SeqCst);
        self.runtime.spawn(async move {
            tracing::trace!(generation, "ticker started");
            loop {
                tokio::time::sleep(shared.interval()).await;
                if !shared.tick(generation) {
                    break;
                }
            }
            tracing::trace!(generation, "ticker finished");
        })
    }
}

impl Drop for CounterHolder {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.get_mut().take() {
            self.shared.generation.fetch_add(1, Ordering::SeqCst);
            ticker.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder() -> CounterHolder {
        CounterHolder::new(
            Handle::current(),
            IntervalRange::default(),
            Duration::from_millis(3_000),
        )
    }

    #[tokio::test]
    async fn starts_at_zero_and_off() {
        let holder = holder();
        let snapshot = holder.snapshot();
        assert_eq!(snapshot.count, 0);
        assert!(!snapshot.auto_increment);
        assert_eq!(snapshot.interval, Duration::from_millis(3_000));
        assert!(!holder.has_ticker());
    }

    #[tokio::test]
    async fn decrement_goes_below_zero() {
        let holder = holder();
        holder.decrement();
        holder.decrement();
        assert_eq!(holder.snapshot().count, -2);
    }

    #[tokio::test]
    async fn count_wraps_instead_of_panicking() {
        let holder = holder();
        holder.shared.state.send_modify(|state| state.count = i64::MAX);
        holder.increment();
        assert_eq!(holder.snapshot().count, i64::MIN);
    }

    #[tokio::test]
    async fn ticker_slot_follows_flag() {
        let holder = holder();
        holder.set_auto_increment(true);
        assert!(holder.has_ticker());
        holder.set_auto_increment(false);
        assert!(!holder.has_ticker());
    }

    #[tokio::test]
    async fn stale_generation_does_not_tick() {
        let holder = holder();
        holder.set_auto_increment(true);
        let stale = holder.shared.generation.load(Ordering::SeqCst);
        holder.set_interval(Duration::from_millis(2_000));
        assert!(!holder.shared.tick(stale));
        assert_eq!(holder.snapshot().count, 0);
    }

    #[tokio::test]
    async fn zero_interval_is_floored() {
        let holder = CounterHolder::new(Handle::current(), IntervalRange::default(), Duration::ZERO);
        assert_eq!(holder.snapshot().interval, MIN_INTERVAL);
    }

    #[tokio::test]
    async fn shutdown_clears_flag_and_ticker() {
        let holder = holder();
        holder.set_auto_increment(true);
        holder.shutdown();
        assert!(!holder.snapshot().auto_increment);
        assert!(!holder.has_ticker());
        holder.shutdown();
    }
}
