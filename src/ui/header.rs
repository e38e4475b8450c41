//! Header bar: logo, main navigation, search box and the Sign In button.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::components::{
    button_width, place_tab_row, render_button, render_input_field, render_tab_selector,
    ButtonKind, InputFieldConfig, TabItem,
};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::COLOR_ACCENT;
use crate::app::{App, Focus};
use crate::models::{NavGroup, Page};

/// Rows taken by the header
pub const HEADER_HEIGHT: u16 = 3;

const LOGO: &str = "▣ ShipTalk";
const SIGN_IN: &str = " Sign In ";
const SEARCH_PLACEHOLDER: &str = "Search discussions...";

/// Pages linked from the header bar.
pub fn header_pages() -> Vec<Page> {
    Page::ALL
        .iter()
        .copied()
        .filter(|p| p.nav_group() == NavGroup::Header)
        .collect()
}

/// Page under the navigation cursor, when navigation has focus.
pub fn nav_cursor(app: &App) -> Option<Page> {
    if app.focus == Focus::Navigation {
        Page::ALL.get(app.nav_index).copied()
    } else {
        None
    }
}

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    registry: &mut HitAreaRegistry,
    ctx: &LayoutContext,
) {
    let logo_width = if ctx.is_extra_small() { 0 } else { LOGO.width() as u16 };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(logo_width),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(ctx.search_width()),
            Constraint::Length(1),
            Constraint::Length(button_width(SIGN_IN)),
            Constraint::Length(1),
        ])
        .split(area);

    let middle = area.y + area.height / 2;

    if logo_width > 0 {
        let logo = Paragraph::new(Line::from(Span::styled(
            LOGO,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(logo, Rect::new(chunks[1].x, middle, chunks[1].width, 1));
    }

    render_nav_tabs(frame, Rect::new(chunks[3].x, middle, chunks[3].width, 1), app, registry, ctx);

    let search = chunks[5];
    let field = InputFieldConfig::new(&app.search)
        .focused(app.focus == Focus::Search)
        .placeholder(SEARCH_PLACEHOLDER);
    render_input_field(frame, search, &field);
    registry.register(search, ClickAction::FocusSearch, None);

    render_button(
        frame,
        registry,
        area,
        chunks[7].x,
        middle,
        SIGN_IN,
        ButtonKind::Primary,
        ClickAction::SignIn,
    );
}

fn render_nav_tabs(
    frame: &mut Frame,
    row: Rect,
    app: &App,
    registry: &mut HitAreaRegistry,
    ctx: &LayoutContext,
) {
    let pages = header_pages();
    let items: Vec<TabItem> = pages
        .iter()
        .map(|p| TabItem::with_short_label(p.label(), p.short_label()))
        .collect();
    let active = pages.iter().position(|p| *p == app.active_page());
    let cursor = nav_cursor(app).and_then(|c| pages.iter().position(|p| *p == c));

    let tabs = render_tab_selector(&items, active, cursor, ctx);
    place_tab_row(frame, registry, row, tabs, pages.into_iter().map(ClickAction::Navigate));
}
