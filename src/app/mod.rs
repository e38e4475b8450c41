//! Application state and logic for the TUI.
//!
//! This module contains the root shell [`App`] and related types:
//! - [`Focus`] - Which UI component has focus
//! - [`AppMessage`] - Messages for async communication
//!
//! The shell owns the active page selection and exactly one
//! [`PageContainer`]. Choosing another page drops the current container,
//! with all its votes, comments and drafts, and mounts a fresh one.

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::Focus;

use tokio::sync::mpsc;

use crate::models::Page;
use crate::startup::ForumConfig;
use crate::state::{AssistantPanel, PageContainer};
use crate::ui::interaction::HitAreaRegistry;

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current focus
    pub focus: Focus,
    /// Highlighted entry in the navigation (index into [`Page::ALL`])
    pub nav_index: usize,
    /// Header search text. Nothing is searched.
    pub search: String,
    /// The assistant panel, shared by every page
    pub assistant: AssistantPanel,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Resolved configuration
    pub config: ForumConfig,
    /// Tick counter for animations (spinner, cursor blink)
    pub tick_count: u64,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set to true on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// Clickable regions registered during the last render
    pub hit_registry: HitAreaRegistry,
    /// Current terminal width in columns
    pub terminal_width: u16,
    /// Current terminal height in rows
    pub terminal_height: u16,
    active_page: Page,
    page: PageContainer,
}

impl App {
    /// Create a new App mounted on the configured start page.
    pub fn new(config: ForumConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let start = config.start_page;

        Self {
            should_quit: false,
            focus: Focus::default(),
            nav_index: start.index(),
            search: String::new(),
            assistant: AssistantPanel::new(config.assistant_delay()),
            message_rx: Some(message_rx),
            message_tx,
            config,
            tick_count: 0,
            needs_redraw: true,
            hit_registry: HitAreaRegistry::new(),
            terminal_width: 80,
            terminal_height: 24,
            active_page: start,
            page: PageContainer::mount(start),
        }
    }

    pub fn active_page(&self) -> Page {
        self.active_page
    }

    /// The one mounted page container.
    pub fn page(&self) -> &PageContainer {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut PageContainer {
        &mut self.page
    }

    /// Switch to `page`.
    ///
    /// Re-selecting the active page changes nothing and returns `false`.
    /// Any other page replaces the mounted container with a fresh one.
    pub fn navigate(&mut self, page: Page) -> bool {
        self.nav_index = page.index();
        if page == self.active_page {
            return false;
        }

        tracing::info!("Navigate: {} -> {}", self.active_page, page);
        self.active_page = page;
        self.page = PageContainer::mount(page);
        // Page-local focus points into the dropped container
        if self.focus.is_page_focus() {
            self.focus = self.page_focus();
        }
        self.mark_dirty();
        true
    }

    /// Focus that enters the mounted page.
    pub fn page_focus(&self) -> Focus {
        if self.active_page.has_posts() {
            Focus::Posts
        } else {
            Focus::NewPostTitle
        }
    }

    /// The header's Sign In button. There is no account system.
    pub fn sign_in(&mut self) {
        tracing::debug!("Sign In pressed; authentication is not available");
    }

    /// Advance animation state (called every tick).
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        // Spinner animates while a reply is pending
        if self.assistant.is_loading() {
            self.mark_dirty();
        }
    }

    /// Update terminal dimensions after a resize.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Stop background work before exit.
    pub fn shutdown(&mut self) {
        self.assistant.teardown();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ForumConfig::default())
    }
}
