//! Color theme constants for the ShipTalk UI
//!
//! A dark gray palette with a single yellow accent.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - logo, buttons, answer titles, links
pub const COLOR_ACCENT: Color = Color::Yellow;

/// Headings and post titles
pub const COLOR_HEADER: Color = Color::White;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Dim text for less important info (bylines, counts, placeholders)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(55, 65, 81);

/// Text drawn on the yellow buttons
pub const COLOR_BUTTON_TEXT: Color = Color::Rgb(17, 24, 39);

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for the answer dialog
pub const COLOR_DIALOG_BG: Color = Color::Rgb(31, 41, 55);

/// Background behind hovered nav entries and cards
pub const COLOR_HOVER_BG: Color = Color::Rgb(75, 85, 99);

/// Card background for the assistant answer preview
pub const COLOR_CARD_BG: Color = Color::Rgb(55, 65, 81);
