use std::sync::Arc;

use crate::counter::{CounterHolder, CounterSnapshot};
use crate::ui::mvi::Reducer;
use crate::ui::settings::{SettingsIntent, SettingsReducer, SettingsState};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Counter,
    Settings,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    holder: Arc<CounterHolder>,
    /// Last snapshot received from the holder; what gets rendered.
    snapshot: CounterSnapshot,
    /// Settings screen state (MVI pattern). Visible means the settings screen is shown.
    settings: SettingsState,
}

impl App {
    pub fn new(holder: Arc<CounterHolder>) -> Self {
        let snapshot = holder.snapshot();
        Self {
            should_quit: false,
            holder,
            snapshot,
            settings: SettingsState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        if self.settings.is_visible() {
            Screen::Settings
        } else {
            Screen::Counter
        }
    }

    pub fn title(&self) -> &'static str {
        match self.screen() {
            Screen::Counter => "Counter++",
            Screen::Settings => "Settings",
        }
    }

    pub fn snapshot(&self) -> &CounterSnapshot {
        &self.snapshot
    }

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    /// Periodic redraw tick. Catches up if a notification was coalesced.
    pub fn on_tick(&mut self) {
        self.refresh();
    }

    /// The holder changed. Its live state is read rather than a queued
    /// value, which may predate a local mutation already on screen.
    pub fn on_counter_changed(&mut self) {
        self.refresh();
    }

    pub fn increment(&mut self) {
        self.holder.increment();
        self.refresh();
    }

    pub fn decrement(&mut self) {
        self.holder.decrement();
        self.refresh();
    }

    pub fn reset(&mut self) {
        self.holder.reset();
        self.refresh();
    }

    pub fn toggle_auto_increment(&mut self) {
        let enabled = !self.holder.snapshot().auto_increment;
        self.holder.set_auto_increment(enabled);
        self.refresh();
    }

    pub fn open_settings(&mut self) {
        let snapshot = self.holder.snapshot();
        self.dispatch_settings(SettingsIntent::Open {
            interval: snapshot.interval,
            range: self.holder.range(),
        });
    }

    pub fn close_settings(&mut self) {
        self.dispatch_settings(SettingsIntent::Close);
    }

    pub fn settings_step_up(&mut self) {
        self.dispatch_settings(SettingsIntent::StepUp);
    }

    pub fn settings_step_down(&mut self) {
        self.dispatch_settings(SettingsIntent::StepDown);
    }

    /// Apply the slider position to the holder.
    pub fn settings_apply(&mut self) {
        let Some(position) = self.settings.position() else {
            return;
        };
        self.holder.set_interval(position);
        self.dispatch_settings(SettingsIntent::Commit);
        self.refresh();
    }

    pub fn dispatch_settings(&mut self, intent: SettingsIntent) {
        dispatch_mvi!(self, settings, SettingsReducer, intent);
    }

    /// Pull the holder's state. Called after local mutations too, so the next
    /// frame reflects them without waiting for the subscription.
    fn refresh(&mut self) {
        let latest = self.holder.snapshot();
        let interval_changed = latest.interval != self.snapshot.interval;
        self.snapshot = latest;
        if interval_changed {
            self.dispatch_settings(SettingsIntent::Sync {
                interval: latest.interval,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::IntervalRange;
    use std::time::Duration;
    use tokio::runtime::Handle;

    fn make_app() -> App {
        let holder = CounterHolder::new(
            Handle::current(),
            IntervalRange::default(),
            Duration::from_millis(3_000),
        );
        App::new(Arc::new(holder))
    }

    #[tokio::test]
    async fn title_follows_screen() {
        let mut app = make_app();
        assert_eq!(app.title(), "Counter++");
        app.open_settings();
        assert_eq!(app.screen(), Screen::Settings);
        assert_eq!(app.title(), "Settings");
        app.close_settings();
        assert_eq!(app.screen(), Screen::Counter);
    }

    #[tokio::test]
    async fn local_mutations_show_immediately() {
        let mut app = make_app();
        app.increment();
        app.increment();
        app.decrement();
        assert_eq!(app.snapshot().count, 1);
        app.reset();
        assert_eq!(app.snapshot().count, 0);
    }

    #[tokio::test]
    async fn late_notification_keeps_applied_interval() {
        let mut app = make_app();
        app.open_settings();
        app.settings_step_up();
        app.settings_step_up();
        app.settings_apply();

        // A change event queued before the apply is handled afterwards
        app.on_counter_changed();

        assert_eq!(app.snapshot().interval, Duration::from_millis(5_000));
        assert_eq!(app.settings().position(), Some(Duration::from_millis(5_000)));
        assert!(!app.settings().is_dirty());
    }
}
