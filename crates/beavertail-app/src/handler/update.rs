//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState, Layout};
use beavertail_core::prelude::*;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    // Nothing is handled once quit has been requested
    if state.should_quit() {
        return UpdateResult::none();
    }

    match message {
        Message::Quit => {
            info!(
                "Quit requested ({} records received, {} retained)",
                state.records_received,
                state.history.len()
            );
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Resize { width, height } => {
            debug!("Terminal resized to {}x{}", width, height);
            state.layout = Layout::new(width, height);
            UpdateResult::none()
        }

        Message::RecordArrived(record) => {
            state.records_received += 1;
            state.history.append(record);
            UpdateResult::none()
        }

        Message::InputClosed => {
            // The session stays open until the user quits
            info!(
                "Input stream ended after {} records",
                state.records_received
            );
            state.input_closed = true;
            UpdateResult::none()
        }

        Message::Tick => UpdateResult::none(),
    }
}
