//! beavertail-tui - Terminal UI for beavertail
//!
//! This crate provides the ratatui-based terminal interface: the render
//! engine that turns the history buffer into a frame, terminal session
//! handling, event polling, and the receive-dispatch-render loop.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::{render_lines, view, RenderOptions};
pub use runner::run;
