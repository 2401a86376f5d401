//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::history::HistoryBuffer;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Accepting and rendering events
    #[default]
    Running,
    /// Quit requested; the loop stops before handling anything else
    Quitting,
}

/// Last known terminal dimensions.
///
/// Zero means "not reported yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
}

impl Layout {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn is_known(&self) -> bool {
        self.height > 0
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current lifecycle phase
    pub phase: AppPhase,

    /// Retained log records, oldest first
    pub history: HistoryBuffer,

    /// Terminal dimensions from the latest resize report
    pub layout: Layout,

    /// Set once the input stream has ended. The session keeps running.
    pub input_closed: bool,

    /// Total records received, including evicted ones
    pub records_received: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with a history sized from settings
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            history: HistoryBuffer::with_capacity(settings.buffer.capacity),
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
