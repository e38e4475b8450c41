// Integration tests for the rendered forum at various terminal sizes:
// - 140x45 (large, wide sidebar)
// - 100x30 (medium)
// - 70x30 (small, sidebar folded into a topic row)
// - 50x14 (extra small)

mod common;

use common::{hit_rect, render_terminal, render_to_string, TestAppBuilder};
use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
use shiptalk::app::Focus;
use shiptalk::models::{Page, VoteDirection};
use shiptalk::ui::{
    theme::COLOR_HOVER_BG, ClickAction, COMMENT_PLACEHOLDER, PANEL_TITLE, QUERY_PLACEHOLDER,
    SIDEBAR_TITLE,
};

fn sidebar_pages() -> [Page; 5] {
    [
        Page::UpsVsFedex,
        Page::Packaging,
        Page::Tracking,
        Page::CostOptimization,
        Page::DeliveryTimes,
    ]
}

// =============================================================================
// Layout by size
// =============================================================================

#[test]
fn test_large_layout_has_sidebar_and_header() {
    let mut app = TestAppBuilder::new().build();
    let screen = render_to_string(&mut app, 140, 45);

    assert!(screen.contains("ShipTalk"));
    assert!(screen.contains("Search discussions..."));
    assert!(screen.contains("Sign In"));
    assert!(screen.contains(SIDEBAR_TITLE));
    assert!(screen.contains("Cost Optimization"));
    assert!(screen.contains(PANEL_TITLE));
    assert!(screen.contains(QUERY_PLACEHOLDER));
    assert!(screen.contains(COMMENT_PLACEHOLDER));

    for page in Page::ALL {
        assert!(
            app.hit_registry
                .rect_for(&ClickAction::Navigate(page))
                .is_some(),
            "{} should be clickable",
            page
        );
    }
}

#[test]
fn test_small_layout_folds_sidebar() {
    let mut app = TestAppBuilder::new().build();
    let screen = render_to_string(&mut app, 70, 30);

    assert!(!screen.contains(SIDEBAR_TITLE));
    assert!(screen.contains("Topics:"));
    for page in sidebar_pages() {
        assert!(app
            .hit_registry
            .rect_for(&ClickAction::Navigate(page))
            .is_some());
    }
}

#[test]
fn test_sidebar_navigate_areas_do_not_overlap_page() {
    let mut app = TestAppBuilder::new().build();
    render_to_string(&mut app, 100, 30);

    let topic = hit_rect(&app, &ClickAction::Navigate(Page::Packaging));
    let card = hit_rect(&app, &ClickAction::SelectPost(0));
    assert!(topic.x + topic.width <= card.x);
}

#[test]
fn test_extra_small_terminal_still_renders() {
    let mut app = TestAppBuilder::new().build();
    let screen = render_to_string(&mut app, 50, 14);
    assert!(screen.contains("Recent Discussions"));
    // Nothing is registered outside the frame
    for area in app.hit_registry.areas() {
        assert!(area.rect.x + area.rect.width <= 50);
        assert!(area.rect.y + area.rect.height <= 14);
    }
}

#[test]
fn test_clipped_card_registers_only_visible_controls() {
    let mut app = TestAppBuilder::new().build();
    render_to_string(&mut app, 100, 30);

    // The page viewport is too short for all three Home posts
    let last = ClickAction::SubmitComment(2);
    assert!(app.hit_registry.rect_for(&last).is_none());
    assert!(app.hit_registry.rect_for(&ClickAction::SubmitComment(0)).is_some());
}

#[test]
fn test_selection_scrolls_into_view() {
    let mut app = TestAppBuilder::new().build();
    app.set_focus(Focus::Posts);
    app.page_mut().select(2);

    let screen = render_to_string(&mut app, 100, 30);
    assert!(screen.contains("New USPS rates impact on small businesses"));
    assert!(app.page().scroll_offset() > 0);
    assert!(app
        .hit_registry
        .rect_for(&ClickAction::Vote {
            post: 2,
            direction: VoteDirection::Up,
        })
        .is_some());
}

// =============================================================================
// Keybind bar
// =============================================================================

#[test]
fn test_keybind_bar_follows_focus() {
    let mut app = TestAppBuilder::new().build();
    let screen = render_to_string(&mut app, 120, 40);
    assert!(screen.contains("[q] quit"));

    app.set_focus(Focus::Posts);
    let screen = render_to_string(&mut app, 120, 40);
    assert!(screen.contains("[u/d] vote"));

    app.set_focus(Focus::Assistant);
    let screen = render_to_string(&mut app, 120, 40);
    assert!(screen.contains("[Enter] ask"));
    assert!(!screen.contains("[q] quit"));
}

// =============================================================================
// Hover
// =============================================================================

#[test]
fn test_hover_highlights_topic_entry() {
    let mut app = TestAppBuilder::new().build();
    render_to_string(&mut app, 120, 40);

    let rect = hit_rect(&app, &ClickAction::Navigate(Page::Tracking));
    app.needs_redraw = false;
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: rect.x + 1,
        row: rect.y,
        modifiers: KeyModifiers::NONE,
    });
    assert!(app.needs_redraw);
    assert!(app.hit_registry.is_hovering());

    let terminal = render_terminal(&mut app, 120, 40);
    // Past the two-column marker, on the label itself
    let cell = &terminal.backend().buffer()[(rect.x + 3, rect.y)];
    assert_eq!(cell.bg, COLOR_HOVER_BG);

    // Moving within the same area needs no redraw
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: rect.x + 2,
        row: rect.y,
        modifiers: KeyModifiers::NONE,
    });
    assert!(!app.needs_redraw);
}
