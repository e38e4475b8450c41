//! Clickable bracket buttons: `[ Sign In ]`, `[ Add Comment ]`, `[▲]`.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BUTTON_TEXT, COLOR_DIM};

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Yellow filled button
    Primary,
    /// Plain text that lights up on hover
    Ghost,
    /// Greyed out and not clickable
    Disabled,
}

/// Width a button label occupies, brackets included.
pub fn button_width(label: &str) -> u16 {
    (label.width() + 2) as u16
}

/// Draw `[label]` at (x, y) and register it for `action`.
///
/// The button is clipped to `bounds`; nothing is drawn or registered if it
/// does not fit. Returns the button rect.
#[allow(clippy::too_many_arguments)]
pub fn render_button(
    frame: &mut Frame,
    registry: &mut HitAreaRegistry,
    bounds: Rect,
    x: u16,
    y: u16,
    label: &str,
    kind: ButtonKind,
    action: ClickAction,
) -> Option<Rect> {
    let width = button_width(label);
    if y < bounds.y || y >= bounds.y + bounds.height || x + width > bounds.x + bounds.width {
        return None;
    }
    let rect = Rect::new(x, y, width, 1);

    let (style, hover) = match kind {
        ButtonKind::Primary => (
            Style::default()
                .fg(COLOR_BUTTON_TEXT)
                .bg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
            Some(Style::default().fg(COLOR_BUTTON_TEXT).bg(Color::LightYellow)),
        ),
        ButtonKind::Ghost => (
            Style::default().fg(Color::Gray),
            Some(Style::default().fg(COLOR_ACCENT).bg(Color::DarkGray)),
        ),
        ButtonKind::Disabled => (Style::default().fg(COLOR_DIM), None),
    };

    if kind != ButtonKind::Disabled {
        registry.register(rect, action, hover);
    }
    let style = registry
        .get_hover_style(rect)
        .map(|h| style.patch(h))
        .unwrap_or(style);

    frame.render_widget(Span::styled(format!("[{}]", label), style), rect);
    Some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_button_width() {
        assert_eq!(button_width(" Sign In "), 11);
        assert_eq!(button_width("▲"), 3);
    }

    #[test]
    fn test_render_registers_hit_area() {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        let mut registry = HitAreaRegistry::new();
        terminal
            .draw(|f| {
                let bounds = f.area();
                let rect = render_button(
                    f,
                    &mut registry,
                    bounds,
                    2,
                    1,
                    " Sign In ",
                    ButtonKind::Primary,
                    ClickAction::SignIn,
                );
                assert_eq!(rect, Some(Rect::new(2, 1, 11, 1)));
            })
            .unwrap();
        assert_eq!(registry.hit_test(5, 1), Some(ClickAction::SignIn));
    }

    #[test]
    fn test_disabled_and_clipped_buttons_not_clickable() {
        let mut terminal = Terminal::new(TestBackend::new(10, 2)).unwrap();
        let mut registry = HitAreaRegistry::new();
        terminal
            .draw(|f| {
                let bounds = f.area();
                render_button(f, &mut registry, bounds, 0, 0, "➤", ButtonKind::Disabled, ClickAction::SubmitAssistant);
                let clipped = render_button(f, &mut registry, bounds, 5, 1, " Submit ", ButtonKind::Primary, ClickAction::SubmitDraft);
                assert!(clipped.is_none());
            })
            .unwrap();
        assert!(registry.is_empty());
    }
}
