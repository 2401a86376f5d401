//! Shutdown on process signals
//!
//! In raw mode Ctrl+C reaches the viewer as a key press, not SIGINT, so this
//! task mostly serves signals sent from outside: `kill` (SIGTERM), a closed
//! terminal window (SIGHUP), or SIGINT delivered before raw mode is entered.

use std::fmt;
use std::future::Future;
use std::io;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use beavertail_core::prelude::*;

/// Signal that asks the viewer to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
    Hangup,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
            Self::Hangup => "SIGHUP",
        };
        f.write_str(name)
    }
}

/// Spawn a task that turns the first shutdown signal into `Message::Quit`
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(forward_shutdown(next_shutdown_signal(), tx))
}

/// Wait for `signal`, then ask the event loop to quit.
///
/// A listener that fails to install leaves shutdown to the quit keys. A loop
/// that already exited (receiver dropped) is not an error.
async fn forward_shutdown<F>(signal: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = io::Result<ShutdownSignal>>,
{
    let signal = match signal.await {
        Ok(signal) => signal,
        Err(e) => {
            warn!("Signal listener unavailable: {}", e);
            return;
        }
    };

    info!("Received {}, shutting down", signal);
    if tx.send(Message::Quit).await.is_err() {
        debug!("Event loop already gone, {} ignored", signal);
    }
}

#[cfg(unix)]
async fn next_shutdown_signal() -> io::Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    let mut hangup = signal(SignalKind::hangup())?;

    let received = tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
        _ = hangup.recv() => ShutdownSignal::Hangup,
    };
    Ok(received)
}

#[cfg(windows)]
async fn next_shutdown_signal() -> io::Result<ShutdownSignal> {
    tokio::signal::ctrl_c().await?;
    Ok(ShutdownSignal::Interrupt)
}
