//! Entering and leaving dashboard mode.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Alternate screen plus mouse capture (wheel scrolling and clicks).
pub fn enter_dashboard_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Undo [`enter_dashboard_mode`] and raw mode. Errors are ignored, so this
/// is safe to call more than once.
pub fn leave_dashboard_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore stdout without access to the ratatui terminal.
pub fn restore_terminal() {
    leave_dashboard_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_writes_escape_sequences() {
        let mut buffer = Vec::new();
        leave_dashboard_mode(&mut buffer);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_enter_writes_escape_sequences() {
        let mut buffer = Vec::new();
        enter_dashboard_mode(&mut buffer).unwrap();
        assert!(!buffer.is_empty());
    }
}
