//! Tab Selector Component
//!
//! A horizontal tab row used for the header navigation. Uses a `▶` marker
//! for the active item with responsive label sizing, and reports where
//! each tab landed so the caller can register click targets.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HOVER_BG};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    /// Create a new tab item with the same label for both normal and compact modes
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            short_label: label,
        }
    }

    /// Create a new tab item with different labels for normal and compact modes
    pub fn with_short_label(label: &'a str, short_label: &'a str) -> Self {
        Self { label, short_label }
    }
}

/// A rendered tab row.
#[derive(Debug, Clone)]
pub struct TabRow {
    pub line: Line<'static>,
    /// `(offset, width)` of each tab relative to the start of the line
    pub tabs: Vec<(u16, u16)>,
}

impl TabRow {
    /// Total display width of the row.
    pub fn width(&self) -> u16 {
        self.line.width() as u16
    }
}

/// Render a horizontal tab selector.
///
/// `active` carries the `▶` marker; `cursor` is the keyboard highlight
/// when the row has focus.
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    active: Option<usize>,
    cursor: Option<usize>,
    ctx: &LayoutContext,
) -> TabRow {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut tabs = Vec::with_capacity(items.len());
    let mut offset: u16 = 0;
    let spacing = if ctx.is_extra_small() { " " } else { "  " };

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };
        let is_active = active == Some(idx);
        let is_cursor = cursor == Some(idx);

        let marker = if is_active { "▶ " } else { "  " };
        let marker_style = Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD);

        let mut text_style = if is_active {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        if is_cursor {
            text_style = text_style.fg(COLOR_ACCENT).add_modifier(Modifier::UNDERLINED);
        }

        let width = (marker.width() + label.width()) as u16;
        tabs.push((offset, width));
        offset += width;

        spans.push(Span::styled(marker.to_string(), marker_style));
        spans.push(Span::styled(label.to_string(), text_style));

        if idx + 1 < items.len() {
            spans.push(Span::styled(spacing.to_string(), Style::default().fg(COLOR_DIM)));
            offset += spacing.width() as u16;
        }
    }

    TabRow {
        line: Line::from(spans),
        tabs,
    }
}

/// Draw `tabs` into `row` and register one click target per tab.
///
/// Tabs that do not fit entirely are left unregistered.
pub fn place_tab_row(
    frame: &mut Frame,
    registry: &mut HitAreaRegistry,
    row: Rect,
    tabs: TabRow,
    actions: impl IntoIterator<Item = ClickAction>,
) {
    frame.render_widget(Paragraph::new(tabs.line), row);

    for ((offset, width), action) in tabs.tabs.into_iter().zip(actions) {
        if offset + width > row.width {
            break;
        }
        let rect = Rect::new(row.x + offset, row.y, width, 1);
        registry.register(rect, action, Some(Style::default().bg(COLOR_HOVER_BG)));
        if let Some(hover) = registry.get_hover_style(rect) {
            frame.buffer_mut().set_style(rect, hover);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_items() -> Vec<TabItem<'static>> {
        vec![
            TabItem::new("Home"),
            TabItem::new("Popular"),
            TabItem::with_short_label("New Post", "New"),
        ]
    }

    fn text_of(row: &TabRow) -> String {
        row.line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_tab_item_new() {
        let item = TabItem::new("Home");
        assert_eq!(item.label, "Home");
        assert_eq!(item.short_label, "Home");
    }

    #[test]
    fn test_marker_before_active() {
        let items = create_test_items();
        let ctx = LayoutContext::new(100, 40);
        let row = render_tab_selector(&items, Some(1), None, &ctx);

        let text = text_of(&row);
        let marker_pos = text.find('▶').unwrap();
        assert!(marker_pos > text.find("Home").unwrap());
        assert!(marker_pos < text.find("Popular").unwrap());
    }

    #[test]
    fn test_tab_offsets() {
        let items = create_test_items();
        let ctx = LayoutContext::new(100, 40);
        let row = render_tab_selector(&items, Some(0), None, &ctx);

        // "▶ Home" + "  " + "  Popular" + "  " + "  New Post"
        assert_eq!(row.tabs, vec![(0, 6), (8, 9), (19, 10)]);
        assert_eq!(row.width(), 29);
    }

    #[test]
    fn test_compact_uses_short_labels() {
        let items = create_test_items();
        let ctx = LayoutContext::new(50, 14);
        let row = render_tab_selector(&items, None, None, &ctx);

        let text = text_of(&row);
        assert!(text.contains("New"));
        assert!(!text.contains("New Post"));
    }

    #[test]
    fn test_cursor_is_underlined() {
        let items = create_test_items();
        let ctx = LayoutContext::new(100, 40);
        let row = render_tab_selector(&items, Some(0), Some(2), &ctx);

        let new_post = row
            .line
            .spans
            .iter()
            .find(|s| s.content == "New Post")
            .unwrap();
        assert!(new_post.style.add_modifier.contains(Modifier::UNDERLINED));
    }
}
