//! Input and message handling for the App.
//!
//! Key events arrive here already filtered to presses. Mouse clicks reach
//! the same actions through `ui::handle_click_action`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{App, AppMessage, Focus};
use crate::models::VoteDirection;

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::AssistantReplied { request_id } => {
                self.assistant.complete(request_id);
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Any key press likely changes state
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        // The answer dialog is modal
        if self.assistant.is_dialog_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.assistant.close_dialog();
            }
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.cycle_focus();
                return;
            }
            KeyCode::BackTab => {
                self.cycle_focus_back();
                return;
            }
            _ => {}
        }

        if !self.focus.is_text_input() && self.handle_shortcut(key) {
            return;
        }

        match self.focus {
            Focus::Navigation => self.handle_navigation_key(key),
            Focus::Search => self.handle_search_key(key),
            Focus::Assistant => self.handle_assistant_key(key),
            Focus::Posts => self.handle_posts_key(key),
            Focus::CommentInput => self.handle_comment_key(key),
            Focus::NewPostTitle | Focus::NewPostContent => self.handle_draft_key(key),
        }
    }

    /// Keys shared by every non-text focus. Returns true if consumed.
    fn handle_shortcut(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                true
            }
            KeyCode::Char(c) if c.is_ascii_digit() => self.navigate_shortcut(c),
            _ => false,
        }
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Up => self.nav_prev(),
            KeyCode::Right | KeyCode::Down => self.nav_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.nav_select(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.search.push(c),
            KeyCode::Backspace => {
                self.search.pop();
            }
            KeyCode::Enter => {
                tracing::debug!("Search '{}' submitted; search is not indexed", self.search);
            }
            KeyCode::Esc => self.set_focus(Focus::Navigation),
            _ => {}
        }
    }

    fn handle_assistant_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('o') if self.assistant.query().is_empty() && self.assistant.answer().is_some() => {
                self.open_answer();
            }
            KeyCode::Char(c) => self.assistant.push_query_char(c),
            KeyCode::Backspace => self.assistant.pop_query_char(),
            KeyCode::Enter => {
                self.submit_assistant();
            }
            KeyCode::Esc => self.set_focus(Focus::Navigation),
            _ => {}
        }
    }

    fn handle_posts_key(&mut self, key: KeyEvent) {
        let selected = self.page().selected_index();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.page_mut().select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.page_mut().select_next(),
            KeyCode::Char('u') | KeyCode::Char('+') => self.vote(selected, VoteDirection::Up),
            KeyCode::Char('d') | KeyCode::Char('-') => self.vote(selected, VoteDirection::Down),
            KeyCode::Char('c') => self.toggle_comments(selected),
            KeyCode::Enter | KeyCode::Char('i') => self.focus_comment(selected),
            KeyCode::Esc => self.set_focus(Focus::Navigation),
            _ => {}
        }
    }

    fn handle_comment_key(&mut self, key: KeyEvent) {
        let selected = self.page().selected_index();
        match key.code {
            KeyCode::Enter => {
                self.submit_comment(selected);
            }
            KeyCode::Esc => self.set_focus(Focus::Posts),
            KeyCode::Backspace => {
                if let Some(post) = self.page_mut().selected_post_mut() {
                    post.pop_input_char();
                }
            }
            KeyCode::Char(c) => {
                if let Some(post) = self.page_mut().selected_post_mut() {
                    post.push_input_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_draft_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit_draft();
            return;
        }

        let on_title = self.focus == Focus::NewPostTitle;
        match key.code {
            KeyCode::Esc => self.set_focus(Focus::Navigation),
            KeyCode::Enter if on_title => self.set_focus(Focus::NewPostContent),
            KeyCode::Enter => {
                if let Some(draft) = self.page_mut().draft_mut() {
                    draft.push_char('\n');
                }
            }
            KeyCode::Backspace => {
                if let Some(draft) = self.page_mut().draft_mut() {
                    draft.pop_char();
                }
            }
            KeyCode::Char(c) => {
                if let Some(draft) = self.page_mut().draft_mut() {
                    draft.push_char(c);
                }
            }
            _ => {}
        }
    }

    /// Insert pasted text into the focused text field.
    ///
    /// Outside a text field the paste goes to the assistant query.
    pub fn handle_paste(&mut self, text: &str) {
        self.mark_dirty();
        if self.assistant.is_dialog_open() {
            return;
        }

        match self.focus {
            Focus::Search => self
                .search
                .extend(text.chars().filter(|c| *c != '\n' && *c != '\r')),
            Focus::CommentInput => {
                if let Some(post) = self.page_mut().selected_post_mut() {
                    post.push_input_str(text);
                }
            }
            Focus::NewPostTitle | Focus::NewPostContent => {
                if let Some(draft) = self.page_mut().draft_mut() {
                    draft.push_str(text);
                }
            }
            Focus::Assistant | Focus::Navigation | Focus::Posts => {
                self.set_focus(Focus::Assistant);
                self.assistant.push_query_str(text);
            }
        }
    }

    /// Handle a mouse event against the hit areas of the last frame.
    ///
    /// Left clicks dispatch the topmost hit area's action, movement updates
    /// hover, and the wheel moves the post selection.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Clicks that miss every hit area do nothing
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    crate::ui::handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_registry.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollDown if !self.assistant.is_dialog_open() => {
                self.page_mut().select_next();
                self.mark_dirty();
            }
            MouseEventKind::ScrollUp if !self.assistant.is_dialog_open() => {
                self.page_mut().select_prev();
                self.mark_dirty();
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Actions shared by keys and clicks
    // ------------------------------------------------------------------

    pub fn vote(&mut self, post: usize, direction: VoteDirection) {
        self.page_mut().select(post);
        if let Some(state) = self.page_mut().post_mut(post) {
            state.apply_vote(direction);
        }
    }

    pub fn toggle_comments(&mut self, post: usize) {
        self.page_mut().select(post);
        if let Some(state) = self.page_mut().post_mut(post) {
            // The toggle only exists with more than two comments
            if state.has_hidden_comments() {
                state.toggle_show_all();
            }
        }
    }

    pub fn focus_comment(&mut self, post: usize) {
        if post < self.page().posts().len() {
            self.page_mut().select(post);
            self.set_focus(Focus::CommentInput);
        }
    }

    /// Submit the comment input of `post`. Returns whether a comment was added.
    pub fn submit_comment(&mut self, post: usize) -> bool {
        self.page_mut().select(post);
        self.page_mut()
            .post_mut(post)
            .map(|state| state.submit_comment_input())
            .unwrap_or(false)
    }

    /// Submit the assistant query. Must run inside a tokio runtime.
    pub fn submit_assistant(&mut self) -> bool {
        let tx = self.message_tx.clone();
        self.assistant.submit(&tx)
    }

    pub fn open_answer(&mut self) -> bool {
        self.assistant.open_dialog()
    }

    /// Submit the New Post form, which only clears it.
    pub fn submit_draft(&mut self) {
        if let Some(draft) = self.page_mut().draft_mut() {
            draft.submit();
        }
        if self.focus == Focus::NewPostContent {
            self.set_focus(Focus::NewPostTitle);
        }
    }
}
