//! Terminal setup and restoration

use beavertail_core::prelude::*;
use ratatui::DefaultTerminal;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Raw mode plus alternate screen, held for the life of the guard.
///
/// Dropping the guard restores the terminal, so every exit path out of the
/// runner (clean quit or `?`) leaves the shell usable before an error report
/// is printed.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        let terminal = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
        debug!("Entered alternate screen");
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        match ratatui::try_restore() {
            Ok(()) => debug!("Terminal restored"),
            Err(e) => error!("{}", Error::TerminalRestore(e.to_string())),
        }
    }
}
