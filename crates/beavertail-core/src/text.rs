//! Display cleanup for untrusted log text
//!
//! Producers that colorize their output (structlog's console renderer, rich)
//! leave ANSI escape sequences in messages. Left in place they would be
//! measured as visible text and break truncation, and a stray newline or tab
//! would push a record onto a second row.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// ANSI escape sequences: CSI (colors, cursor), OSC (titles, hyperlinks),
/// and two-byte escapes.
static ANSI_ESCAPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \x1b\[[0-9;?]*[A-Za-z]               # CSI
        | \x1b\][^\x07\x1b]*(?:\x07|\x1b\\)  # OSC, BEL or ST terminated
        | \x1b[A-Za-z]                       # simple escapes
        ",
    )
    .expect("ANSI regex pattern is valid")
});

/// Remove ANSI escape sequences, keeping every visible character.
///
/// ```
/// use beavertail_core::text::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[31mred\x1b[0m text"), "red text");
/// assert_eq!(strip_ansi_codes("plain"), "plain");
/// ```
pub fn strip_ansi_codes(input: &str) -> Cow<'_, str> {
    ANSI_ESCAPE_PATTERN.replace_all(input, "")
}

/// Make text safe to place on a single terminal row.
///
/// Strips ANSI sequences, then replaces every remaining control character
/// (newline, carriage return, tab, lone ESC) with a space. Borrows when the
/// input is already clean.
pub fn sanitize_for_display(input: &str) -> Cow<'_, str> {
    let stripped = strip_ansi_codes(input);
    if !stripped.chars().any(char::is_control) {
        return stripped;
    }

    Cow::Owned(
        stripped
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect(),
    )
}
