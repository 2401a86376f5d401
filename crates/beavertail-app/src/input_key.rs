//! Abstract input key event, independent of terminal library.
//!
//! Keeps beavertail-app free of crossterm types; the TUI converts
//! `crossterm::event::KeyEvent` into an [`InputKey`] at the boundary.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    Backspace,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Whether this key ends the session (`q` or Ctrl+C)
    pub fn is_quit(&self) -> bool {
        matches!(self, InputKey::Char('q') | InputKey::CharCtrl('c'))
    }
}
