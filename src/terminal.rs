//! Terminal setup and restore

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::warn;

/// Raw mode plus alternate screen, restored when dropped.
///
/// Restoring on drop covers early returns and errors in the event loop
/// as well as normal exit.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        // From here on, a failure must still undo raw mode
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, DisableLineWrap, Hide)
            .context("entering alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, Show, EnableLineWrap, LeaveAlternateScreen) {
            warn!(error = %e, "failed to leave alternate screen");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!(error = %e, "failed to disable raw mode");
        }
        let _ = stdout.flush();
    }
}
