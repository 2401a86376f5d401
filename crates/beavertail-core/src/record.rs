//! Log record model
//!
//! A [`LogRecord`] is built once by the parser and never mutated afterwards:
//! fields are private and only exposed through accessors. The consuming
//! `with_*` methods exist for construction only.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde_json::{Map, Value};
use std::fmt;

/// Number of request id characters shown in the log view
pub const REQUEST_ID_DISPLAY_LEN: usize = 8;

/// Clock shown for timestamps chrono cannot represent (NaN, far out of range)
const INVALID_CLOCK: &str = "??:??:??.???";

/// Canonical level category used to select a display style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LevelCategory {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LevelCategory {
    /// Derive the category from a free-form level string.
    ///
    /// Matching is case-insensitive. `WARN` and `WARNING` are the same
    /// category; anything unrecognized is treated as `Info`.
    pub fn from_level(level: &str) -> Self {
        match level.to_uppercase().as_str() {
            "DEBUG" => LevelCategory::Debug,
            "INFO" => LevelCategory::Info,
            "WARN" | "WARNING" => LevelCategory::Warn,
            "ERROR" => LevelCategory::Error,
            _ => LevelCategory::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LevelCategory::Debug => "DEBUG",
            LevelCategory::Info => "INFO",
            LevelCategory::Warn => "WARN",
            LevelCategory::Error => "ERROR",
        }
    }
}

impl fmt::Display for LevelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single log entry read from the input stream
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    timestamp: f64,
    level: String,
    message: String,
    request_id: Option<String>,
    logger: Option<String>,
    extra: Map<String, Value>,
}

impl LogRecord {
    pub fn new(timestamp: f64, level: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level: level.into(),
            message: message.into(),
            request_id: None,
            logger: None,
            extra: Map::new(),
        }
    }

    /// Record synthesized from a raw line that could not be decoded.
    ///
    /// Stamped with the current wall-clock time at `INFO`, with the raw line
    /// as the message and every optional field empty.
    pub fn fallback(line: impl Into<String>) -> Self {
        Self::new(now_timestamp(), "INFO", line)
    }

    /// Set the request id. Empty strings are treated as absent.
    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id.filter(|id| !id.is_empty());
        self
    }

    /// Set the originating logger. Empty strings are treated as absent.
    pub fn with_logger(mut self, logger: Option<String>) -> Self {
        self.logger = logger.filter(|name| !name.is_empty());
        self
    }

    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Seconds since the Unix epoch, possibly fractional
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    /// The level exactly as it appeared in the input
    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn logger(&self) -> Option<&str> {
        self.logger.as_deref()
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn level_category(&self) -> LevelCategory {
        LevelCategory::from_level(&self.level)
    }

    /// Upper-cased level for display (unrecognized levels are shown as given)
    pub fn display_level(&self) -> String {
        self.level.to_uppercase()
    }

    /// Request id cut to its first [`REQUEST_ID_DISPLAY_LEN`] characters
    pub fn short_request_id(&self) -> Option<&str> {
        self.request_id().map(|id| match id.char_indices().nth(REQUEST_ID_DISPLAY_LEN) {
            Some((end, _)) => &id[..end],
            None => id,
        })
    }
}

/// Current wall-clock time as fractional seconds since the epoch
pub fn now_timestamp() -> f64 {
    let now = Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_nanos()) / 1e9
}

/// Format a timestamp as `HH:MM:SS.mmm` in local time
pub fn format_clock(timestamp: f64) -> String {
    format_clock_in(timestamp, &Local)
}

/// Format a timestamp as `HH:MM:SS.mmm` in the given time zone.
///
/// Milliseconds are truncated, not rounded. Values that cannot be represented
/// render as `??:??:??.???`.
pub fn format_clock_in<Tz>(timestamp: f64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    split_timestamp(timestamp)
        .and_then(|(secs, nanos)| DateTime::from_timestamp(secs, nanos))
        .map(|utc| utc.with_timezone(tz).format("%H:%M:%S%.3f").to_string())
        .unwrap_or_else(|| INVALID_CLOCK.to_string())
}

/// Split fractional seconds into whole seconds and nanoseconds.
///
/// The fraction is rounded to whole microseconds. Near the present an f64
/// carries only ~0.2µs of sub-second precision, so `.123` is stored as
/// `.12299990...` and would otherwise display as `.122`.
fn split_timestamp(timestamp: f64) -> Option<(i64, u32)> {
    if !timestamp.is_finite() {
        return None;
    }

    let whole = timestamp.floor();
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return None;
    }

    let mut secs = whole as i64;
    let mut micros = ((timestamp - whole) * 1e6).round() as u32;
    if micros >= 1_000_000 {
        secs = secs.checked_add(1)?;
        micros -= 1_000_000;
    }

    Some((secs, micros * 1000))
}
