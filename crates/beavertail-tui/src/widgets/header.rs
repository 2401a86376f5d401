//! Header bar
//!
//! A single bold row naming the session and the quit keys.

use beavertail_core::text::sanitize_for_display;
use ratatui::text::{Line, Span};

use crate::theme::styles;

/// Top row of the log view
pub struct Header<'a> {
    title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Header text, padded by one column on each side.
    ///
    /// The title comes from config or the command line and is cleaned the
    /// same way as record text so it stays on one row.
    pub fn text(&self) -> String {
        format!(
            " {} - Press 'q' or Ctrl+C to quit ",
            sanitize_for_display(self.title)
        )
    }

    pub fn to_line(&self) -> Line<'static> {
        Line::from(Span::styled(self.text(), styles::header()))
    }
}
