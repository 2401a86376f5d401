//! Color palette.

use ratatui::style::Color;

// --- Header bar ---
pub const HEADER_FG: Color = Color::Rgb(0xFA, 0xFA, 0xFA); // #FAFAFA
pub const HEADER_BG: Color = Color::Rgb(0x7D, 0x56, 0xF4); // #7D56F4

// --- Log level colors ---
pub const LOG_DEBUG: Color = Color::Rgb(0x62, 0x62, 0x62); // #626262
pub const LOG_INFO: Color = Color::Rgb(0x04, 0xB5, 0x75); // #04B575
pub const LOG_WARN: Color = Color::Rgb(0xFF, 0xAA, 0x00); // #FFAA00
pub const LOG_ERROR: Color = Color::Rgb(0xFF, 0x44, 0x44); // #FF4444
