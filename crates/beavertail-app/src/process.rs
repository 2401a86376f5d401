//! Message processing for the event loop
//!
//! Runs messages through the TEA update function, following up on any
//! message the handler returns, and drains the event channel without
//! blocking.

use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message and any follow-up messages it produces
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}

/// Process every message already queued on the channel.
///
/// Stops early once a quit has been processed so nothing queued behind it is
/// applied. Returns the number of messages taken from the channel.
pub fn drain_pending(state: &mut AppState, rx: &mut mpsc::Receiver<Message>) -> usize {
    let mut processed = 0;
    while !state.should_quit() {
        match rx.try_recv() {
            Ok(message) => {
                process_message(state, message);
                processed += 1;
            }
            Err(_) => break,
        }
    }
    processed
}
