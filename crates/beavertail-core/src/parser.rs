//! Line parser: one raw input line in, one [`LogRecord`] out
//!
//! Decoding is best effort. A line is first tried as a JSON object in the
//! record shape; anything that does not decode (bad syntax, wrong shape, wrong
//! field types, missing `message`) becomes a fallback record carrying the raw
//! line. The decode error never leaves this module.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::record::LogRecord;

/// Maximum number of entries kept in a record's `extra` map.
///
/// Input is untrusted; keys beyond this bound are dropped.
pub const MAX_EXTRA_FIELDS: usize = 64;

/// Outcome of decoding one input line
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// Empty or whitespace-only line; produces no record
    Empty,
    /// Line decoded as a structured record
    Structured(LogRecord),
    /// Line did not decode; the record carries the raw line as its message
    Fallback(LogRecord),
}

impl ParsedLine {
    pub fn into_record(self) -> Option<LogRecord> {
        match self {
            ParsedLine::Empty => None,
            ParsedLine::Structured(record) | ParsedLine::Fallback(record) => Some(record),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedLine::Fallback(_))
    }
}

/// Wire shape of a structured line.
///
/// `timestamp` and `level` fall back to their zero values when absent or
/// null; unknown top-level keys land in `unknown` and are folded into `extra`.
#[derive(Debug, Deserialize)]
struct WireRecord {
    #[serde(default)]
    timestamp: Option<f64>,
    #[serde(default)]
    level: Option<String>,
    message: String,
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    logger: Option<String>,
    #[serde(default)]
    extra: Option<Map<String, Value>>,
    #[serde(flatten)]
    unknown: Map<String, Value>,
}

impl WireRecord {
    fn into_record(self) -> LogRecord {
        let extra = merge_extra(self.extra, self.unknown);
        LogRecord::new(
            self.timestamp.unwrap_or_default(),
            self.level.unwrap_or_default(),
            self.message,
        )
        .with_request_id(self.request_id)
        .with_logger(self.logger)
        .with_extra(extra)
    }
}

/// Decode a line (already stripped of its terminator) into a record.
///
/// Returns `None` for empty and whitespace-only lines; every other line yields
/// a record.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    decode_line(line).into_record()
}

/// Decode a line, reporting which path produced the record
pub fn decode_line(line: &str) -> ParsedLine {
    if line.trim().is_empty() {
        return ParsedLine::Empty;
    }

    match serde_json::from_str::<WireRecord>(line) {
        Ok(wire) => ParsedLine::Structured(wire.into_record()),
        Err(e) => {
            tracing::trace!("line is not a structured record ({}), using fallback", e);
            ParsedLine::Fallback(LogRecord::fallback(line))
        }
    }
}

/// Combine the explicit `extra` object with unknown top-level keys.
///
/// Explicit entries win on a key collision. The result is capped at
/// [`MAX_EXTRA_FIELDS`] entries.
fn merge_extra(explicit: Option<Map<String, Value>>, unknown: Map<String, Value>) -> Map<String, Value> {
    let mut extra = Map::new();
    let mut dropped = 0usize;

    for (key, value) in explicit.unwrap_or_default().into_iter().chain(unknown) {
        if extra.contains_key(&key) {
            continue;
        }
        if extra.len() >= MAX_EXTRA_FIELDS {
            dropped += 1;
            continue;
        }
        extra.insert(key, value);
    }

    if dropped > 0 {
        tracing::debug!("dropped {} extra fields beyond the limit of {}", dropped, MAX_EXTRA_FIELDS);
    }

    extra
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::now_timestamp;
    use serde_json::json;

    #[test]
    fn test_empty_line_produces_nothing() {
        assert_eq!(decode_line(""), ParsedLine::Empty);
        assert!(parse_line("").is_none());
    }

    #[test]
    fn test_whitespace_only_line_produces_nothing() {
        assert!(parse_line("   ").is_none());
        assert!(parse_line("\t \r").is_none());
    }

    #[test]
    fn test_full_structured_line() {
        let line = r#"{"timestamp": 1700000000.5, "level": "error", "message": "boom", "request_id": "abcdef1234", "logger": "api", "extra": {"user": 7}}"#;
        let parsed = decode_line(line);
        assert!(matches!(parsed, ParsedLine::Structured(_)));

        let record = parsed.into_record().unwrap();
        assert_eq!(record.timestamp(), 1_700_000_000.5);
        assert_eq!(record.level(), "error");
        assert_eq!(record.message(), "boom");
        assert_eq!(record.request_id(), Some("abcdef1234"));
        assert_eq!(record.logger(), Some("api"));
        assert_eq!(record.extra().get("user"), Some(&json!(7)));
    }

    #[test]
    fn test_integer_timestamp_is_accepted() {
        let record = parse_line(r#"{"timestamp": 1700000000, "level": "INFO", "message": "x"}"#)
            .unwrap();
        assert_eq!(record.timestamp(), 1_700_000_000.0);
    }

    #[test]
    fn test_missing_timestamp_and_level_use_defaults() {
        let parsed = decode_line(r#"{"message": "only a message"}"#);
        assert!(!parsed.is_fallback());

        let record = parsed.into_record().unwrap();
        assert_eq!(record.timestamp(), 0.0);
        assert_eq!(record.level(), "");
        assert_eq!(record.message(), "only a message");
    }

    #[test]
    fn test_null_optional_fields_are_tolerated() {
        let record = parse_line(
            r#"{"timestamp": null, "level": null, "message": "m", "request_id": null, "logger": null}"#,
        )
        .unwrap();
        assert_eq!(record.timestamp(), 0.0);
        assert_eq!(record.request_id(), None);
        assert_eq!(record.logger(), None);
    }

    #[test]
    fn test_missing_message_falls_back() {
        let line = r#"{"timestamp": 1.0, "level": "INFO"}"#;
        let parsed = decode_line(line);
        assert!(parsed.is_fallback());
        assert_eq!(parsed.into_record().unwrap().message(), line);
    }

    #[test]
    fn test_plain_text_falls_back() {
        let before = now_timestamp();
        let record = parse_line("plain text, not json").unwrap();

        assert_eq!(record.message(), "plain text, not json");
        assert_eq!(record.level(), "INFO");
        assert!((record.timestamp() - before).abs() < 1.0);
    }

    #[test]
    fn test_malformed_json_falls_back_verbatim() {
        let line = r#"{"message": "unterminated"#;
        let parsed = decode_line(line);
        assert!(parsed.is_fallback());
        assert_eq!(parsed.into_record().unwrap().message(), line);
    }

    #[test]
    fn test_wrong_field_type_falls_back() {
        let line = r#"{"timestamp": "yesterday", "message": "m"}"#;
        assert!(decode_line(line).is_fallback());

        let line = r#"{"level": 3, "message": "m"}"#;
        assert!(decode_line(line).is_fallback());

        let line = r#"{"message": "m", "extra": [1, 2]}"#;
        assert!(decode_line(line).is_fallback());
    }

    #[test]
    fn test_non_object_json_falls_back() {
        for line in ["42", "\"quoted\"", "[1, 2, 3]", "null", "true"] {
            let parsed = decode_line(line);
            assert!(parsed.is_fallback(), "expected fallback for {line}");
            assert_eq!(parsed.into_record().unwrap().message(), line);
        }
    }

    #[test]
    fn test_fallback_keeps_surrounding_whitespace() {
        let record = parse_line("  indented text  ").unwrap();
        assert_eq!(record.message(), "  indented text  ");
    }

    #[test]
    fn test_unknown_fields_are_routed_to_extra() {
        let record = parse_line(
            r#"{"timestamp": 1.0, "level": "INFO", "message": "m", "path": "/health", "status": 200}"#,
        )
        .unwrap();
        assert_eq!(record.extra().get("path"), Some(&json!("/health")));
        assert_eq!(record.extra().get("status"), Some(&json!(200)));
        assert!(record.extra().get("message").is_none());
    }

    #[test]
    fn test_explicit_extra_wins_over_top_level_key() {
        let record = parse_line(r#"{"message": "m", "extra": {"k": "inner"}, "k": "outer"}"#)
            .unwrap();
        assert_eq!(record.extra().get("k"), Some(&json!("inner")));
        assert_eq!(record.extra().len(), 1);
    }

    #[test]
    fn test_extra_is_capped() {
        let mut payload = Map::new();
        payload.insert("message".to_string(), json!("m"));
        for i in 0..(MAX_EXTRA_FIELDS + 10) {
            payload.insert(format!("field_{i:03}"), json!(i));
        }
        let line = Value::Object(payload).to_string();

        let record = parse_line(&line).unwrap();
        assert_eq!(record.extra().len(), MAX_EXTRA_FIELDS);
    }
}
