//! Terminal management module with RAII pattern for automatic cleanup.
//!
//! The `TerminalManager` ensures that terminal state is properly restored
//! when the forum exits, whether normally or due to a panic.
//!
//! # Example
//!
//! ```no_run
//! use shiptalk::terminal::TerminalManager;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut term_manager = TerminalManager::new(true)?;
//!     let terminal = term_manager.terminal();
//!
//!     // ... run the event loop ...
//!
//!     // Terminal is restored when term_manager is dropped
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::UiError;

/// RAII guard that restores terminal state on drop.
///
/// When dropped it disables raw mode, mouse capture and bracketed paste,
/// leaves the alternate screen and shows the cursor.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore the terminal now. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the TUI.
///
/// Install [`setup_panic_hook`] before creating the manager so a panic
/// also restores the terminal.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

fn init_failed(err: io::Error) -> UiError {
    UiError::TerminalInitFailed {
        message: err.to_string(),
    }
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen, enable bracketed paste
    /// and (when `mouse` is set) mouse capture, then clear the screen.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::TerminalInitFailed`] if any step fails; whatever
    /// was already switched on is switched off again.
    pub fn new(mouse: bool) -> Result<Self> {
        enable_raw_mode().map_err(init_failed)?;
        // Dropping the guard on an early return undoes the steps above
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout, mouse).map_err(init_failed)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(init_failed)?;
        terminal.clear().map_err(init_failed)?;

        tracing::debug!("Terminal initialised (mouse capture: {})", mouse);
        Ok(Self { terminal, guard })
    }

    /// Get a mutable reference to the underlying terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Get the current terminal size.
    pub fn size(&self) -> Result<ratatui::prelude::Rect> {
        Ok(self.terminal.size()?.into())
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal
            .show_cursor()
            .map_err(|e| UiError::TerminalRestoreFailed {
                message: e.to_string(),
            })?;
        Ok(())
    }
}
