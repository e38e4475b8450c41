//! Page containers.
//!
//! A [`PageContainer`] is what the root shell mounts for the active page.
//! It turns the page's seed posts into independent [`PostState`]s, or
//! holds a [`NewPostDraft`] for the New Post page, and tracks which post
//! the keyboard cursor is on.

use super::new_post::NewPostDraft;
use super::post::PostState;
use crate::models::{seed_posts, Page};

#[derive(Debug, Clone)]
pub struct PageContainer {
    page: Page,
    posts: Vec<PostState>,
    draft: Option<NewPostDraft>,
    /// Index of the highlighted post
    selected: usize,
    /// First post drawn in the viewport
    scroll_offset: usize,
}

impl PageContainer {
    /// Mount a fresh container for `page` from seed data.
    pub fn mount(page: Page) -> Self {
        let posts: Vec<PostState> = seed_posts(page).into_iter().map(PostState::new).collect();
        let draft = (!page.has_posts()).then(NewPostDraft::new);
        tracing::debug!("Mounted page '{}' with {} posts", page, posts.len());
        Self {
            page,
            posts,
            draft,
            selected: 0,
            scroll_offset: 0,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn heading(&self) -> &'static str {
        self.page.heading()
    }

    pub fn posts(&self) -> &[PostState] {
        &self.posts
    }

    pub fn post(&self, index: usize) -> Option<&PostState> {
        self.posts.get(index)
    }

    pub fn post_mut(&mut self, index: usize) -> Option<&mut PostState> {
        self.posts.get_mut(index)
    }

    pub fn draft(&self) -> Option<&NewPostDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut NewPostDraft> {
        self.draft.as_mut()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_post(&self) -> Option<&PostState> {
        self.posts.get(self.selected)
    }

    pub fn selected_post_mut(&mut self) -> Option<&mut PostState> {
        self.posts.get_mut(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.posts.len() {
            self.selected = index;
            self.ensure_selected_visible();
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.posts.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.ensure_selected_visible();
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Keep the selection on screen given the last post index that was
    /// fully drawn in the previous frame.
    pub fn follow_selection(&mut self, last_fully_visible: usize) {
        if self.selected > last_fully_visible {
            self.scroll_offset += self.selected - last_fully_visible;
        }
        self.ensure_selected_visible();
    }

    fn ensure_selected_visible(&mut self) {
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        }
        let max_offset = self.posts.len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}
