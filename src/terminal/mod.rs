//! Raw-mode terminal ownership.
//!
//! [`TerminalManager`] switches the terminal into dashboard mode on creation
//! and puts it back when dropped. [`install_panic_hook`] covers the panic path,
//! where the manager's destructor may never run.

mod panic;
mod setup;

pub use panic::install_panic_hook;
pub use setup::{enter_dashboard_mode, leave_dashboard_mode, restore_terminal};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal for the lifetime of the dashboard.
pub struct TerminalManager {
    terminal: DashboardTerminal,
    restored: bool,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen with mouse capture, clear.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        enter_dashboard_mode(&mut stdout)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut DashboardTerminal {
        &mut self.terminal
    }

    /// Put the terminal back. Later calls, including the one from `Drop`, do nothing.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        leave_dashboard_mode(self.terminal.backend_mut());
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!("terminal restore failed: {}", err);
        }
    }
}
