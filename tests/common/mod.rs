//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use counterpp::counter::{CounterHolder, IntervalRange};
use counterpp::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::runtime::Handle;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3_000);

/// Slack added to sleeps so a test never wakes on the same instant as a tick.
pub const SLACK: Duration = Duration::from_millis(10);

/// Holder on the current runtime with the default 1s..=10s range.
pub fn make_holder(interval: Duration) -> CounterHolder {
    CounterHolder::new(Handle::current(), IntervalRange::default(), interval)
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

/// App over a fresh holder. Must run inside a tokio runtime.
pub fn make_app() -> (App, Arc<CounterHolder>) {
    let holder = Arc::new(make_holder(DEFAULT_INTERVAL));
    (App::new(Arc::clone(&holder)), holder)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}
