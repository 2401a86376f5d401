//! # beavertail-core - Core Domain Types
//!
//! Foundation crate for beavertail. Provides the log record model, the line
//! parser, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, serde_json, chrono, regex, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Records (`record`)
//! - [`LogRecord`] - One immutable structured log entry read from the input stream
//! - [`LevelCategory`] - Canonical level used to pick a display style
//!
//! ### Parsing (`parser`)
//! - [`parse_line()`] - Decode one input line, falling back to a plain-text record
//! - [`ParsedLine`] - Tagged outcome of decoding a line
//!
//! ### Display text (`text`)
//! - [`text::sanitize_for_display()`] - Strip ANSI sequences and control characters
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use beavertail_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod parser;
pub mod prelude;
pub mod record;
pub mod text;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use parser::{decode_line, parse_line, ParsedLine, MAX_EXTRA_FIELDS};
pub use record::{format_clock, format_clock_in, LevelCategory, LogRecord, REQUEST_ID_DISPLAY_LEN};
