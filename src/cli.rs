//! Command-line arguments and how they override the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(
    name = "counterpp",
    version,
    about = "Terminal counter with auto-increment"
)]
pub struct Cli {
    /// Path to the config file (default: <config_dir>/counterpp/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial auto-increment interval in milliseconds
    #[arg(long = "interval-ms", value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Start with auto-increment switched on
    #[arg(long)]
    pub auto: bool,

    /// Log filter directive, e.g. "debug" or "counterpp=trace"
    #[arg(long = "log-level", value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Load the config file and apply overrides from the command line.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let config = Config::load_from(&self.config_path())?;
        self.apply_overrides(config)
    }

    /// Apply overrides to an already loaded config and re-validate.
    pub fn apply_overrides(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(interval_ms) = self.interval_ms {
            config.counter.interval_ms = interval_ms;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        config.validate()?;
        Ok(config)
    }
}
