use std::io;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Raw mode plus alternate screen, undone when the guard goes away.
///
/// The guard exists as soon as raw mode is on, so a failure later in setup
/// still leaves the terminal usable.
#[derive(Debug)]
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    /// Puts the terminal back. Later calls are no-ops.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        let raw = disable_raw_mode();
        execute!(io::stdout(), LeaveAlternateScreen, Show)?;
        raw
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
