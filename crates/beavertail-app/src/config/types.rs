//! Configuration types for beavertail
//!
//! Every section and field is optional in the file; missing values take
//! the defaults below.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_CAPACITY;

/// Header title shown when none is configured
pub const DEFAULT_TITLE: &str = "SpeedBeaver Logger";

/// Default terminal poll timeout
pub const DEFAULT_TICK_RATE_MS: u64 = 50;

/// Lower bound for the poll timeout
pub const MIN_TICK_RATE_MS: u64 = 10;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub buffer: BufferSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// History buffer settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BufferSettings {
    /// Maximum number of records retained in memory
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for BufferSettings {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Title shown in the header bar
    #[serde(default = "default_title")]
    pub title: String,

    /// Show timestamps in UTC instead of local time
    #[serde(default)]
    pub utc: bool,

    /// How long to wait for a terminal event before ticking (milliseconds)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            utc: false,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiSettings {
    /// Poll timeout, clamped to [`MIN_TICK_RATE_MS`]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

/// Values given on the command line, applied on top of the file
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub capacity: Option<usize>,
    pub title: Option<String>,
    pub utc: bool,
}

impl Settings {
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(capacity) = overrides.capacity {
            self.buffer.capacity = capacity;
        }
        if let Some(title) = overrides.title {
            self.ui.title = title;
        }
        if overrides.utc {
            self.ui.utc = true;
        }
        self
    }
}
