//! "Popular Topics" navigation.
//!
//! Drawn as a bordered column on wide terminals and folded into a single
//! tab row above the page on narrow ones.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::components::{place_tab_row, render_tab_selector, TabItem};
use super::header::nav_cursor;
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::text::truncate_to_width;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_HOVER_BG, COLOR_TEXT};
use crate::app::App;
use crate::models::{NavGroup, Page};

pub const SIDEBAR_TITLE: &str = "Popular Topics";

/// Pages listed under Popular Topics.
pub fn sidebar_pages() -> Vec<Page> {
    Page::ALL
        .iter()
        .copied()
        .filter(|p| p.nav_group() == NavGroup::Sidebar)
        .collect()
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App, registry: &mut HitAreaRegistry) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", SIDEBAR_TITLE),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = nav_cursor(app);
    for (row, page) in sidebar_pages().into_iter().enumerate() {
        let y = inner.y + row as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let rect = Rect::new(inner.x, y, inner.width, 1);

        let is_active = page == app.active_page();
        let marker = if is_active { "▶ " } else { "  " };
        let mut style = if is_active {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        if cursor == Some(page) {
            style = style.fg(COLOR_ACCENT).add_modifier(Modifier::UNDERLINED);
        }

        registry.register(
            rect,
            ClickAction::Navigate(page),
            Some(Style::default().fg(COLOR_ACCENT).bg(COLOR_HOVER_BG)),
        );
        if let Some(hover) = registry.get_hover_style(rect) {
            style = style.patch(hover);
        }

        let label = format!("{} {}", page.icon(), page.label());
        let label = truncate_to_width(&label, inner.width.saturating_sub(2) as usize);
        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
            Span::styled(label, style),
        ]);
        frame.render_widget(Paragraph::new(line), rect);
    }
}

/// One-row version of the sidebar for narrow terminals.
pub fn render_topic_strip(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    registry: &mut HitAreaRegistry,
    ctx: &LayoutContext,
) {
    let pages = sidebar_pages();
    let items: Vec<TabItem> = pages
        .iter()
        .map(|p| TabItem::with_short_label(p.label(), p.short_label()))
        .collect();
    let active = pages.iter().position(|p| *p == app.active_page());
    let cursor = nav_cursor(app).and_then(|c| pages.iter().position(|p| *p == c));

    let prefix = "Topics:";
    let prefix_width = prefix.len() as u16;
    frame.render_widget(
        Paragraph::new(Span::styled(prefix, Style::default().fg(COLOR_DIM))),
        Rect::new(area.x, area.y, prefix_width.min(area.width), 1),
    );

    let row = Rect::new(
        area.x + prefix_width.min(area.width),
        area.y,
        area.width.saturating_sub(prefix_width),
        1,
    );
    let tabs = render_tab_selector(&items, active, cursor, ctx);
    place_tab_row(frame, registry, row, tabs, pages.into_iter().map(ClickAction::Navigate));
}
