//! Main render/view function (View in TEA pattern)


use beavertail_app::config::{Settings, DEFAULT_TITLE};
use beavertail_app::{AppState, HistoryBuffer, Layout};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::widgets::{Header, LogLine};

/// Shown until the first terminal size report
pub const LOADING_TEXT: &str = "Loading...";

/// Rows taken by the header, the gap under it, and the bottom margin
const RESERVED_ROWS: usize = 3;

/// Display choices that do not live in the app state
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Title shown in the header bar
    pub title: String,
    /// Show clocks in UTC instead of local time
    pub utc: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            utc: false,
        }
    }
}

impl RenderOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            title: settings.ui.title.clone(),
            utc: settings.ui.utc,
        }
    }
}

/// Build the frame for a history snapshot at the given terminal size.
///
/// Pure: the same history, layout and options always give the same lines.
/// Until the height is known the frame is a single `Loading...` line.
/// Otherwise it is the header, a blank line, the most recent records that
/// fit in `height - 3` rows, then blank lines up to exactly `height`.
pub fn render_lines(
    history: &HistoryBuffer,
    layout: Layout,
    options: &RenderOptions,
) -> Vec<Line<'static>> {
    if !layout.is_known() {
        return vec![Line::from(LOADING_TEXT)];
    }

    let height = usize::from(layout.height);
    let visible = height.saturating_sub(RESERVED_ROWS);

    let mut lines = Vec::with_capacity(height.max(2));
    lines.push(Header::new(&options.title).to_line());
    lines.push(Line::default());

    lines.extend(
        history
            .recent(visible)
            .map(|record| LogLine::new(record).utc(options.utc).to_line(layout.width)),
    );

    lines.resize(height, Line::default());
    lines
}

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState, options: &RenderOptions) {
    let lines = render_lines(&state.history, state.layout, options);
    frame.render_widget(Paragraph::new(lines), frame.area());
}
