//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! use common::{render_to_string, TestAppBuilder};
//!
//! let mut app = TestAppBuilder::new().with_page(Page::Tracking).build();
//! let screen = render_to_string(&mut app, 120, 40);
//! ```

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

use shiptalk::app::App;
use shiptalk::models::Page;
use shiptalk::startup::ForumConfig;
use shiptalk::ui::{self, ClickAction};

/// Builds an [`App`] from a [`ForumConfig`] tuned for tests.
#[derive(Debug, Clone)]
pub struct TestAppBuilder {
    config: ForumConfig,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            config: ForumConfig::default().with_log_file(None),
        }
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.config = self.config.with_start_page(page);
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config = self.config.with_assistant_delay_ms(delay_ms);
        self
    }

    pub fn build(self) -> App {
        App::new(self.config)
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw one frame into a fresh `TestBackend` and return it.
pub fn render_terminal(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    app.needs_redraw = false;
    terminal
}

/// Draw one frame and flatten the buffer into newline-separated rows.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let terminal = render_terminal(app, width, height);
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

/// Rect registered for `action` in the last frame.
pub fn hit_rect(app: &App, action: &ClickAction) -> Rect {
    app.hit_registry
        .rect_for(action)
        .unwrap_or_else(|| panic!("no hit area for {:?}", action))
}

/// Left-click the middle of the hit area registered for `action`.
pub fn click(app: &mut App, action: &ClickAction) {
    let rect = hit_rect(app, action);
    click_at(app, rect.x + rect.width / 2, rect.y + rect.height / 2);
}

pub fn click_at(app: &mut App, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
