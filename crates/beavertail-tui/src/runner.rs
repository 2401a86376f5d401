//! Main TUI runner - entry point and event loop
//!
//! - `run`: wires the stdin reader, signal handler and terminal together
//! - `run_loop`: receive-dispatch-render cycle until quit

use std::io::{self, BufReader};
use std::time::Duration;

use beavertail_app::config::Settings;
use beavertail_app::message::Message;
use beavertail_app::process::{drain_pending, process_message};
use beavertail_app::state::AppState;
use beavertail_app::{input, signals};
use beavertail_core::prelude::*;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::render::RenderOptions;
use crate::terminal::TerminalSession;
use crate::{event, render, terminal};

/// Messages buffered between the reader and the loop before the reader waits
const CHANNEL_CAPACITY: usize = 1024;

/// Run the log viewer on stdin until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let mut state = AppState::with_settings(&settings);
    let options = RenderOptions::from_settings(&settings);
    let tick_rate = settings.ui.tick_rate();
    info!(
        "Starting viewer: capacity={}, utc={}",
        state.history.capacity(),
        options.utc
    );

    // Unified message channel: stdin records and OS signals
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

    signals::spawn_signal_handler(msg_tx.clone());
    input::spawn_input_reader(BufReader::new(io::stdin()), msg_tx)
        .context("Failed to start input reader")?;

    let mut session = TerminalSession::enter()?;
    let terminal = session.terminal_mut();

    let size = terminal.size().context("Failed to read terminal size")?;
    process_message(
        &mut state,
        Message::Resize {
            width: size.width,
            height: size.height,
        },
    );

    let result = run_loop(terminal, &mut state, msg_rx, &options, tick_rate);

    // Restore before main prints any error report
    drop(session);

    info!(
        "Viewer stopped: {} records received, {} retained",
        state.records_received,
        state.history.len()
    );
    result
}

/// Main event loop
///
/// Applies everything already queued, draws, then waits up to `tick_rate`
/// for a terminal event. The receiver is dropped on return, which stops the
/// reader at its next send.
fn run_loop(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    options: &RenderOptions,
    tick_rate: Duration,
) -> Result<()> {
    while !state.should_quit() {
        // Records and signals (non-blocking)
        drain_pending(state, &mut msg_rx);
        if state.should_quit() {
            break;
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state, options))
            .map_err(|e| Error::terminal(format!("draw failed: {}", e)))?;

        // Handle terminal events
        if let Some(message) = event::poll(tick_rate)? {
            process_message(state, message);
        }
    }

    Ok(())
}
