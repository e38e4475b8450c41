//! Terminal setup and teardown functions.
//!
//! Low-level functions for entering and leaving TUI mode, used by
//! `TerminalManager` and the panic hook.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// - Enters alternate screen (preserves original terminal content)
/// - Enables bracketed paste (pasted text arrives as one event)
/// - Enables mouse capture when `mouse` is set (clicks, hover, wheel)
pub fn enter_tui_mode<W: Write>(writer: &mut W, mouse: bool) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)?;
    if mouse {
        execute!(writer, EnableMouseCapture)?;
    }
    Ok(())
}

/// Leave TUI mode and restore terminal to normal state.
///
/// Safe to call more than once; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();

    let _ = execute!(
        writer,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Restore the terminal after a panic. Ignores all errors.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_without_mouse_skips_capture() {
        let mut with_mouse = Vec::new();
        let mut without_mouse = Vec::new();
        enter_tui_mode(&mut with_mouse, true).unwrap();
        enter_tui_mode(&mut without_mouse, false).unwrap();
        assert!(with_mouse.len() > without_mouse.len());
    }

    #[test]
    fn test_leave_tui_mode_writes_sequences() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        assert!(!buffer.is_empty());
    }
}
