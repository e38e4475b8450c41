//! Input Field Component
//!
//! A bordered text input with focus handling and placeholder text. Single
//! line fields keep the end of the text (where the cursor is) visible;
//! multi-line fields wrap and show the last rows that fit.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::text::{tail_to_width, wrap_text};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Block cursor drawn at the end of a focused field
const CURSOR: char = '\u{2588}';

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
    /// Wrap the value over several rows instead of scrolling sideways
    pub multiline: bool,
    /// Whether to draw the cursor this frame (for blinking)
    pub cursor_visible: bool,
}

impl<'a> InputFieldConfig<'a> {
    /// Create a new input field configuration
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            focused: false,
            placeholder: None,
            multiline: false,
            cursor_visible: true,
        }
    }

    /// Set whether the input is focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Wrap over several rows
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Show or hide the cursor this frame
    pub fn cursor_visible(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }
}

/// Visible lines for a field of the given inner size.
pub fn input_lines(config: &InputFieldConfig, inner_width: u16, inner_height: u16) -> Vec<Line<'static>> {
    let inner_width = inner_width.max(1) as usize;

    if config.value.is_empty() && !config.focused {
        if let Some(placeholder) = config.placeholder {
            return vec![Line::from(Span::styled(
                placeholder.to_string(),
                Style::default().fg(COLOR_DIM),
            ))];
        }
    }

    let text_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut content = config.value.to_string();
    if config.focused && config.cursor_visible {
        content.push(CURSOR);
    }

    if config.multiline {
        let wrapped = wrap_text(&content, inner_width);
        let skip = wrapped.len().saturating_sub(inner_height.max(1) as usize);
        wrapped
            .into_iter()
            .skip(skip)
            .map(|l| Line::from(Span::styled(l, text_style)))
            .collect()
    } else {
        let visible = tail_to_width(&content, inner_width).to_string();
        vec![Line::from(Span::styled(visible, text_style))]
    }
}

/// Render an input field filling `area` (borders included).
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) {
    let border_color = if config.focused {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let inner = block.inner(area);
    let lines = input_lines(config, inner.width, inner.height);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_input_field_config_builder() {
        let config = InputFieldConfig::new("Value")
            .focused(true)
            .placeholder("Add a comment...")
            .multiline(true);

        assert!(config.focused);
        assert!(config.multiline);
        assert_eq!(config.placeholder, Some("Add a comment..."));
    }

    #[test]
    fn test_placeholder_when_empty_and_unfocused() {
        let config = InputFieldConfig::new("").placeholder("Search topics...");
        assert_eq!(text_of(&input_lines(&config, 20, 1)), vec!["Search topics..."]);
    }

    #[test]
    fn test_focused_shows_cursor_not_placeholder() {
        let config = InputFieldConfig::new("").placeholder("Search topics...").focused(true);
        assert_eq!(text_of(&input_lines(&config, 20, 1)), vec!["\u{2588}"]);
    }

    #[test]
    fn test_single_line_keeps_tail() {
        let config = InputFieldConfig::new("abcdefgh").focused(true);
        assert_eq!(text_of(&input_lines(&config, 4, 1)), vec!["fgh\u{2588}"]);
    }

    #[test]
    fn test_multiline_shows_last_rows() {
        let config = InputFieldConfig::new("one two three four").multiline(true);
        assert_eq!(text_of(&input_lines(&config, 9, 2)), vec!["three", "four"]);
    }
}
