//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use beavertail_core::LogRecord;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Terminal dimensions reported (initial size or resize)
    Resize { width: u16, height: u16 },

    /// A record was parsed from the input stream
    RecordArrived(LogRecord),

    /// The input stream reached end-of-stream; no more records will arrive
    InputClosed,

    /// Tick event emitted when no terminal event arrived within the poll timeout
    Tick,

    /// Quit immediately (quit key, signal handler)
    Quit,
}
