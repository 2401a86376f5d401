//! Input reader: the background producer feeding the event loop
//!
//! Reads the input stream one line at a time on a dedicated thread, parses
//! each non-empty line, and hands the record to the loop through the event
//! channel. The thread owns no application state; records cross over as
//! messages only.

use std::io::{BufRead, ErrorKind};
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc;

use crate::message::Message;
use beavertail_core::parse_line;
use beavertail_core::prelude::*;

/// Why the reader stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderExit {
    /// The stream ended (or failed); `InputClosed` was sent
    EndOfStream { records: u64 },
    /// The loop went away; no further records can be delivered
    ChannelClosed { records: u64 },
}

/// Spawn the reader on its own thread.
///
/// The thread is detached from the async runtime so a read blocked on a
/// stalled stream never holds up shutdown.
pub fn spawn_input_reader<R>(reader: R, tx: mpsc::Sender<Message>) -> Result<JoinHandle<ReaderExit>>
where
    R: BufRead + Send + 'static,
{
    let handle = thread::Builder::new()
        .name("input-reader".to_string())
        .spawn(move || read_records(reader, &tx))?;
    Ok(handle)
}

/// Read lines until end-of-stream, sending one `RecordArrived` per non-empty line.
///
/// Each record is sent before the next line is read, so messages keep the
/// order of the input. On end-of-stream a single `InputClosed` is sent. Read
/// errors are treated as end-of-stream. Must be called outside the async
/// runtime (it uses `blocking_send`).
pub fn read_records<R: BufRead>(mut reader: R, tx: &mpsc::Sender<Message>) -> ReaderExit {
    let mut buf = Vec::new();
    let mut records = 0u64;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = decode_line_bytes(&buf);
                trace!("input: {}", line);

                let Some(record) = parse_line(&line) else {
                    continue;
                };

                if tx.blocking_send(Message::RecordArrived(record)).is_err() {
                    debug!("event channel closed, stopping input reader");
                    return ReaderExit::ChannelClosed { records };
                }
                records += 1;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!("Failed to read input stream: {}", e);
                break;
            }
        }
    }

    info!("Input stream ended after {} records", records);
    if tx.blocking_send(Message::InputClosed).is_err() {
        return ReaderExit::ChannelClosed { records };
    }
    ReaderExit::EndOfStream { records }
}

/// Strip the line terminator and decode, replacing invalid UTF-8
fn decode_line_bytes(buf: &[u8]) -> String {
    let mut bytes = buf;
    if let Some(rest) = bytes.strip_suffix(b"\n") {
        bytes = rest;
    }
    if let Some(rest) = bytes.strip_suffix(b"\r") {
        bytes = rest;
    }
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(rx: &mut mpsc::Receiver<Message>) -> Vec<Message> {
        let mut out = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            out.push(msg);
        }
        out
    }

    fn arrived_messages(messages: &[Message]) -> Vec<String> {
        messages
            .iter()
            .filter_map(|m| match m {
                Message::RecordArrived(record) => Some(record.message().to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_reads_lines_in_order_then_closes() {
        let input = "{\"message\": \"one\"}\nplain two\n{\"message\": \"three\"}\n";
        let (tx, mut rx) = mpsc::channel(16);

        let exit = read_records(Cursor::new(input), &tx);
        assert_eq!(exit, ReaderExit::EndOfStream { records: 3 });

        let messages = collect(&mut rx);
        assert_eq!(arrived_messages(&messages), vec!["one", "plain two", "three"]);
        assert_eq!(messages.last(), Some(&Message::InputClosed));
        assert_eq!(messages.len(), 4);
    }

    #[test]
    fn test_empty_lines_emit_nothing() {
        let input = "\n   \n\t\nreal\n\n";
        let (tx, mut rx) = mpsc::channel(16);

        let exit = read_records(Cursor::new(input), &tx);
        assert_eq!(exit, ReaderExit::EndOfStream { records: 1 });

        let messages = collect(&mut rx);
        assert_eq!(arrived_messages(&messages), vec!["real"]);
    }

    #[test]
    fn test_last_line_without_newline() {
        let (tx, mut rx) = mpsc::channel(16);
        read_records(Cursor::new("first\nno newline"), &tx);

        let messages = collect(&mut rx);
        assert_eq!(arrived_messages(&messages), vec!["first", "no newline"]);
    }

    #[test]
    fn test_crlf_terminators_are_stripped() {
        let (tx, mut rx) = mpsc::channel(16);
        read_records(Cursor::new("windows line\r\n"), &tx);

        let messages = collect(&mut rx);
        assert_eq!(arrived_messages(&messages), vec!["windows line"]);
    }

    #[test]
    fn test_invalid_utf8_is_not_dropped() {
        let (tx, mut rx) = mpsc::channel(16);
        read_records(Cursor::new(b"bad \xff byte\n".to_vec()), &tx);

        let messages = collect(&mut rx);
        assert_eq!(arrived_messages(&messages), vec!["bad \u{FFFD} byte"]);
    }

    #[test]
    fn test_empty_stream_only_closes() {
        let (tx, mut rx) = mpsc::channel(4);
        let exit = read_records(Cursor::new(""), &tx);

        assert_eq!(exit, ReaderExit::EndOfStream { records: 0 });
        assert_eq!(collect(&mut rx), vec![Message::InputClosed]);
    }

    #[test]
    fn test_stops_when_loop_is_gone() {
        let (tx, rx) = mpsc::channel(4);
        drop(rx);

        let exit = read_records(Cursor::new("a\nb\nc\n"), &tx);
        assert_eq!(exit, ReaderExit::ChannelClosed { records: 0 });
    }

    #[test]
    fn test_spawned_reader_delivers_to_channel() {
        let (tx, mut rx) = mpsc::channel(16);
        let handle = spawn_input_reader(Cursor::new("x\ny\n"), tx).unwrap();

        let mut received = Vec::new();
        while let Some(msg) = rx.blocking_recv() {
            let done = msg == Message::InputClosed;
            received.push(msg);
            if done {
                break;
            }
        }

        assert_eq!(arrived_messages(&received), vec!["x", "y"]);
        assert_eq!(
            handle.join().unwrap(),
            ReaderExit::EndOfStream { records: 2 }
        );
    }
}
