//! beavertail-app - Application state and orchestration for beavertail
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the bounded history buffer, the message type, the update
//! function, the stdin reader that feeds the loop, and configuration loading.

pub mod config;
pub mod handler;
pub mod history;
pub mod input;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateResult};
pub use history::{HistoryBuffer, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use input::{read_records, spawn_input_reader, ReaderExit};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, Layout};
