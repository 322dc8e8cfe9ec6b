use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::counter::IntervalRange;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Auto-increment interval defaults and slider bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Initial auto-increment interval in milliseconds (default: 3000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Lowest selectable interval (default: 1000).
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,
    /// Highest selectable interval (default: 10000).
    #[serde(default = "default_max_interval_ms")]
    pub max_interval_ms: u64,
    /// Slider step (default: 1000).
    #[serde(default = "default_step_ms")]
    pub step_ms: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log output settings.
///
/// The terminal belongs to the UI, so logs only go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Logging is disabled when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_interval_ms() -> u64 {
    3_000
}

fn default_min_interval_ms() -> u64 {
    IntervalRange::DEFAULT_MIN_MS
}

fn default_max_interval_ms() -> u64 {
    IntervalRange::DEFAULT_MAX_MS
}

fn default_step_ms() -> u64 {
    IntervalRange::DEFAULT_STEP_MS
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CounterConfig {
    /// Slider bounds, or `None` if the configured bounds are inconsistent.
    pub fn range(&self) -> Option<IntervalRange> {
        IntervalRange::new(self.min_interval_ms, self.max_interval_ms, self.step_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            min_interval_ms: default_min_interval_ms(),
            max_interval_ms: default_max_interval_ms(),
            step_ms: default_step_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
