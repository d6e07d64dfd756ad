use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};

use crate::errors::BrowseError;

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen. Raw mode is undone if the
/// screen switch fails.
pub fn init_terminal() -> Result<CrosstermTerminal, BrowseError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    tracing::debug!("terminal initialised");
    Ok(terminal)
}

pub fn restore_terminal(terminal: &mut CrosstermTerminal) -> Result<(), BrowseError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Owns the terminal while raw mode and the alternate screen are active.
/// Dropping it restores the terminal, on normal exit, on `?` early
/// returns and while unwinding from a panic.
pub struct TerminalGuard {
    terminal: CrosstermTerminal,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self, BrowseError> {
        Ok(TerminalGuard {
            terminal: init_terminal()?,
        })
    }
}

impl Deref for TerminalGuard {
    type Target = CrosstermTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(&mut self.terminal) {
            tracing::error!("failed to restore terminal: {}", e);
        }
    }
}
