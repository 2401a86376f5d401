//! Semantic style builders.

use beavertail_core::LevelCategory;
use ratatui::style::{Modifier, Style};

use super::palette;

// --- Header ---
pub fn header() -> Style {
    Style::default()
        .fg(palette::HEADER_FG)
        .bg(palette::HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

// --- Log levels ---
pub fn level(category: LevelCategory) -> Style {
    let color = match category {
        LevelCategory::Debug => palette::LOG_DEBUG,
        LevelCategory::Info => palette::LOG_INFO,
        LevelCategory::Warn => palette::LOG_WARN,
        LevelCategory::Error => palette::LOG_ERROR,
    };
    Style::default().fg(color)
}
