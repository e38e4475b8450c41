//! Focus and navigation methods for the App.

use super::{App, Focus};
use crate::models::Page;
use crate::state::DraftField;

impl App {
    /// Focus ring for the mounted page: shell slots, then page slots.
    fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = vec![Focus::Navigation, Focus::Search, Focus::Assistant];
        if self.active_page().has_posts() {
            ring.push(Focus::Posts);
        } else {
            ring.push(Focus::NewPostTitle);
            ring.push(Focus::NewPostContent);
        }
        ring
    }

    fn ring_position(&self, ring: &[Focus]) -> usize {
        // The comment input sits in the posts slot
        let focus = match self.focus {
            Focus::CommentInput => Focus::Posts,
            other => other,
        };
        ring.iter().position(|f| *f == focus).unwrap_or(0)
    }

    /// Cycle focus to the next component (Tab)
    pub fn cycle_focus(&mut self) {
        let ring = self.focus_ring();
        let next = (self.ring_position(&ring) + 1) % ring.len();
        self.set_focus(ring[next]);
    }

    /// Cycle focus to the previous component (Shift+Tab)
    pub fn cycle_focus_back(&mut self) {
        let ring = self.focus_ring();
        let pos = self.ring_position(&ring);
        let prev = if pos == 0 { ring.len() - 1 } else { pos - 1 };
        self.set_focus(ring[prev]);
    }

    /// Move focus, keeping the New Post draft's active field in step.
    pub fn set_focus(&mut self, focus: Focus) {
        let field = match focus {
            Focus::NewPostTitle => Some(DraftField::Title),
            Focus::NewPostContent => Some(DraftField::Content),
            _ => None,
        };
        if let (Some(field), Some(draft)) = (field, self.page_mut().draft_mut()) {
            draft.focus(field);
        }
        if focus == Focus::Navigation {
            self.nav_index = self.active_page().index();
        }
        self.focus = focus;
    }

    /// Highlight the previous navigation entry
    pub fn nav_prev(&mut self) {
        self.nav_index = if self.nav_index == 0 {
            Page::ALL.len() - 1
        } else {
            self.nav_index - 1
        };
    }

    /// Highlight the next navigation entry
    pub fn nav_next(&mut self) {
        self.nav_index = (self.nav_index + 1) % Page::ALL.len();
    }

    /// Navigate to the highlighted entry
    pub fn nav_select(&mut self) {
        if let Some(page) = Page::ALL.get(self.nav_index).copied() {
            self.navigate(page);
        }
    }

    /// Jump to a page by its 1-based digit shortcut.
    pub fn navigate_shortcut(&mut self, digit: char) -> bool {
        match Page::from_shortcut(digit) {
            Some(page) => {
                self.navigate(page);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_focus_on_posts_page() {
        let mut app = App::default();
        assert_eq!(app.focus, Focus::Navigation);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Search);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Assistant);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Posts);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Navigation);
    }

    #[test]
    fn test_cycle_focus_back_wraps() {
        let mut app = App::default();
        app.cycle_focus_back();
        assert_eq!(app.focus, Focus::Posts);
        app.cycle_focus_back();
        assert_eq!(app.focus, Focus::Assistant);
    }

    #[test]
    fn test_cycle_focus_new_post_fields() {
        let mut app = App::default();
        app.navigate(Page::New);
        app.set_focus(Focus::Assistant);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::NewPostTitle);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::NewPostContent);
        assert_eq!(app.page().draft().unwrap().field, DraftField::Content);
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Navigation);
    }

    #[test]
    fn test_comment_input_cycles_like_posts() {
        let mut app = App::default();
        app.focus = Focus::CommentInput;
        app.cycle_focus();
        assert_eq!(app.focus, Focus::Navigation);
    }

    #[test]
    fn test_nav_wraps_and_selects() {
        let mut app = App::default();
        app.nav_prev();
        assert_eq!(app.nav_index, Page::ALL.len() - 1);
        app.nav_next();
        assert_eq!(app.nav_index, 0);
        app.nav_next();
        app.nav_select();
        assert_eq!(app.active_page(), Page::Popular);
    }

    #[test]
    fn test_navigate_shortcut() {
        let mut app = App::default();
        assert!(app.navigate_shortcut('4'));
        assert_eq!(app.active_page(), Page::UpsVsFedex);
        assert!(!app.navigate_shortcut('9'));
        assert!(!app.navigate_shortcut('0'));
        assert_eq!(app.active_page(), Page::UpsVsFedex);
    }
}
