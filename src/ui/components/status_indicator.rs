//! Status Indicator Component
//!
//! Single-line spinner. The assistant panel shows it while its reply timer
//! is running.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::COLOR_ACCENT;

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks each spinner frame stays on screen (16ms ticks)
const TICKS_PER_FRAME: u64 = 6;

/// Status indicator types
#[derive(Debug, Clone)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner {
        /// Message to display (e.g., "Thinking...")
        message: String,
        /// Current frame index (cycles)
        frame: usize,
    },
}

impl StatusIndicatorType {
    /// Create a spinner whose frame follows the app tick counter
    pub fn spinner(message: impl Into<String>, tick_count: u64) -> Self {
        Self::Spinner {
            message: message.into(),
            frame: spinner_frame_for_tick(tick_count),
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Spinner frame for an app tick count.
pub fn spinner_frame_for_tick(tick_count: u64) -> usize {
    ((tick_count / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize
}

/// Render a status indicator as one line.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => Line::from(vec![
            Span::styled(
                format!("{} ", get_spinner_char(*frame)),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    }
}

// ============================================================================
// Tests
// ============================================================================
