//! One formatted row of the log view
//!
//! `HH:MM:SS.mmm LEVEL [request] (logger) message`, with the level token
//! colored by category. Truncation works on display columns of the visible
//! text and keeps each span's style, so styling never counts toward the
//! width and never gets cut in half.

use beavertail_core::text::sanitize_for_display;
use beavertail_core::{format_clock, format_clock_in, LogRecord};
use chrono::Utc;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::styles;

/// Width the level token is padded to
pub const LEVEL_WIDTH: usize = 5;

/// Appended to lines that had to be cut
pub const ELLIPSIS: &str = "...";

/// Columns left free at the right edge of the terminal
const RIGHT_MARGIN: usize = 2;

/// A log record formatted for display
pub struct LogLine<'a> {
    record: &'a LogRecord,
    utc: bool,
}

impl<'a> LogLine<'a> {
    pub fn new(record: &'a LogRecord) -> Self {
        Self { record, utc: false }
    }

    /// Show the clock in UTC instead of local time
    pub fn utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    /// The full, untruncated row
    pub fn spans(&self) -> Vec<Span<'static>> {
        let record = self.record;
        let clock = if self.utc {
            format_clock_in(record.timestamp(), &Utc)
        } else {
            format_clock(record.timestamp())
        };

        let level = sanitize_for_display(&record.display_level()).into_owned();
        let mut spans = vec![
            Span::raw(format!("{clock} ")),
            Span::styled(
                format!("{level:<LEVEL_WIDTH$}"),
                styles::level(record.level_category()),
            ),
        ];

        if let Some(request_id) = record.short_request_id() {
            spans.push(Span::raw(format!(
                " [{}]",
                sanitize_for_display(request_id)
            )));
        }
        if let Some(logger) = record.logger() {
            spans.push(Span::raw(format!(" ({})", sanitize_for_display(logger))));
        }
        spans.push(Span::raw(format!(
            " {}",
            sanitize_for_display(record.message())
        )));

        spans
    }

    /// The row fitted to a terminal `width` columns wide
    pub fn to_line(&self, width: u16) -> Line<'static> {
        fit_to_width(self.spans(), width)
    }
}

/// Total display columns of a row
pub fn display_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}

/// Fit a row into `width - 2` columns.
///
/// Rows that fit are returned unchanged. Longer rows keep their first
/// `width - 5` columns followed by `...`. Terminals narrower than the
/// ellipsis get a plain cut at `width - 2`.
pub fn fit_to_width(spans: Vec<Span<'static>>, width: u16) -> Line<'static> {
    let limit = usize::from(width).saturating_sub(RIGHT_MARGIN);
    if display_width(&spans) <= limit {
        return Line::from(spans);
    }

    let ellipsis_width = ELLIPSIS.len();
    if limit < ellipsis_width {
        return Line::from(take_columns(&spans, limit));
    }

    let keep = limit - ellipsis_width;
    let mut kept = take_columns(&spans, keep);

    // A wide character straddling the cut leaves one column short
    let short = keep - display_width(&kept);
    let mut tail = " ".repeat(short);
    tail.push_str(ELLIPSIS);
    kept.push(Span::raw(tail));

    Line::from(kept)
}

/// The leading `columns` display columns of a row, span styles preserved
pub fn take_columns(spans: &[Span<'static>], columns: usize) -> Vec<Span<'static>> {
    let mut out = Vec::new();
    let mut used = 0;

    for span in spans {
        if used >= columns {
            break;
        }

        let span_width = span.content.width();
        if used + span_width <= columns {
            used += span_width;
            out.push(span.clone());
            continue;
        }

        let mut text = String::new();
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > columns {
                break;
            }
            used += w;
            text.push(c);
        }
        if !text.is_empty() {
            out.push(Span::styled(text, span.style));
        }
        break;
    }

    out
}
