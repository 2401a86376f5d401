//! Custom widget components

mod header;
mod log_line;

pub use header::Header;
pub use log_line::{display_width, fit_to_width, take_columns, LogLine, ELLIPSIS, LEVEL_WIDTH};
