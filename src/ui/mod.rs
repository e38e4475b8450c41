//! UI rendering for ShipTalk
//!
//! Lays out the forum shell:
//! - Header with logo, main navigation, search box and Sign In
//! - "Popular Topics" sidebar (a tab row on narrow terminals)
//! - Assistant panel above the active page
//! - Bottom: keybind hints
//!
//! ## Responsive Layout System
//!
//! Render functions receive a `LayoutContext` built from the frame size.
//! Below 80 columns the sidebar collapses into a row of topic tabs; on
//! short terminals the answer preview shrinks to a single line.
//!
//! ## Mouse
//!
//! Every control registers a hit area while it is drawn. The registry is
//! rebuilt each frame, in paint order, so the answer dialog drawn last
//! sits on top of everything.

mod assistant;
pub mod components;
mod header;
pub mod interaction;
mod keybinds;
pub mod layout;
mod new_post;
mod posts;
mod sidebar;
pub mod text;
pub mod theme;

pub use interaction::{handle_click_action, ClickAction, HitAreaRegistry};
pub use layout::{breakpoints, LayoutContext, SizeCategory};

pub use assistant::{PANEL_TITLE, QUERY_PLACEHOLDER, RELATED_HEADING};
pub use new_post::{CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER};
pub use posts::COMMENT_PLACEHOLDER;
pub use sidebar::SIDEBAR_TITLE;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use header::HEADER_HEIGHT;
use theme::COLOR_BORDER;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy)]
struct Regions {
    header: Rect,
    sidebar: Option<Rect>,
    topics: Option<Rect>,
    assistant: Rect,
    page: Rect,
    hints: Rect,
}

impl Regions {
    fn compute(area: Rect, app: &App, ctx: &LayoutContext) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let (sidebar, main) = if ctx.should_collapse_sidebar() {
            (None, rows[1])
        } else {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(ctx.sidebar_width()),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .split(rows[1]);
            (Some(cols[0]), cols[2])
        };

        let topics_height = if sidebar.is_none() { 1 } else { 0 };
        let main_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(assistant::panel_height(app, ctx)),
                Constraint::Length(topics_height),
                Constraint::Min(0),
            ])
            .split(main);

        Self {
            header: rows[0],
            sidebar,
            topics: (topics_height > 0).then_some(main_rows[1]),
            assistant: main_rows[0],
            page: main_rows[2],
            hints: rows[2],
        }
    }
}

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen and rebuild the app's hit areas.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);
    let regions = Regions::compute(area, app, &ctx);

    // Scrolling depends on card heights at this frame's width
    posts::follow_selection(app, regions.page);

    let mut registry = std::mem::take(&mut app.hit_registry);
    registry.clear();
    draw(frame, area, &regions, app, &mut registry, &ctx);
    app.hit_registry = registry;
}

fn draw(
    frame: &mut Frame,
    area: Rect,
    regions: &Regions,
    app: &App,
    registry: &mut HitAreaRegistry,
    ctx: &LayoutContext,
) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer, area);

    header::render_header(frame, regions.header, app, registry, ctx);
    if let Some(sidebar) = regions.sidebar {
        sidebar::render_sidebar(frame, sidebar, app, registry);
    }
    if let Some(topics) = regions.topics {
        sidebar::render_topic_strip(frame, topics, app, registry, ctx);
    }
    assistant::render_assistant_panel(frame, regions.assistant, app, registry, ctx);
    posts::render_page(frame, regions.page, app, registry);
    frame.render_widget(Paragraph::new(keybinds::build_keybinds(app, ctx)), regions.hints);

    if app.assistant.is_dialog_open() {
        assistant::render_answer_dialog(frame, area, app, registry, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Focus;
    use crate::models::Page;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_app(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_home_wide() {
        let mut app = App::default();
        let screen = draw_app(&mut app, 120, 40);
        assert!(screen.contains("ShipTalk"));
        assert!(screen.contains("Recent Discussions"));
        assert!(screen.contains("Popular Topics"));
        assert!(screen.contains("Ask a shipping question..."));
        assert!(app.hit_registry.rect_for(&ClickAction::SignIn).is_some());
        assert!(app
            .hit_registry
            .rect_for(&ClickAction::Navigate(Page::DeliveryTimes))
            .is_some());
    }

    #[test]
    fn test_narrow_folds_sidebar_into_topics() {
        let mut app = App::default();
        let screen = draw_app(&mut app, 70, 30);
        assert!(!screen.contains("Popular Topics"));
        assert!(screen.contains("Topics:"));
        assert!(app
            .hit_registry
            .rect_for(&ClickAction::Navigate(Page::UpsVsFedex))
            .is_some());
    }

    #[test]
    fn test_render_new_post_page() {
        let mut app = App::default();
        app.navigate(Page::New);
        let screen = draw_app(&mut app, 100, 40);
        assert!(screen.contains("Create a New Post"));
        assert!(screen.contains("Enter your post title"));
        assert!(app.hit_registry.rect_for(&ClickAction::SubmitDraft).is_some());
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = App::default();
        app.set_focus(Focus::Posts);
        draw_app(&mut app, 20, 6);
        draw_app(&mut app, 1, 1);
    }
}
