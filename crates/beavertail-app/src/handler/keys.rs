//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;

/// Convert a key event to a message. Only the quit keys do anything.
pub fn handle_key(key: InputKey) -> Option<Message> {
    if key.is_quit() {
        Some(Message::Quit)
    } else {
        None
    }
}
