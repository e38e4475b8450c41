//! Per-post view state.
//!
//! A [`PostState`] owns one post and everything the user can change about
//! it: votes, appended comments, the comment input buffer and whether the
//! full comment list is expanded. Holders never share data, so voting on a
//! post in one page leaves any duplicate elsewhere untouched.

use chrono::{Local, NaiveDate};

use crate::models::{Comment, Post, VoteDirection, ANONYMOUS_AUTHOR};

/// Number of comments shown while the list is collapsed.
pub const COLLAPSED_COMMENT_COUNT: usize = 2;

/// Format a date the way comment bylines show it (`M/D/YYYY`).
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Mutable view state for a single post.
#[derive(Debug, Clone)]
pub struct PostState {
    post: Post,
    comment_input: String,
    show_all_comments: bool,
    /// Next id handed to an appended comment. Monotonic per post.
    next_comment_id: u64,
}

impl PostState {
    pub fn new(post: Post) -> Self {
        let next_comment_id = post.max_comment_id() + 1;
        Self {
            post,
            comment_input: String::new(),
            show_all_comments: false,
            next_comment_id,
        }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn vote_count(&self) -> i64 {
        self.post.vote_count
    }

    pub fn comments(&self) -> &[Comment] {
        &self.post.comments
    }

    /// Apply one vote. There is no floor, ceiling or per-user limit.
    pub fn apply_vote(&mut self, direction: VoteDirection) {
        self.post.vote_count += direction.delta();
    }

    /// Append a comment dated today.
    ///
    /// Blank or whitespace-only text is ignored and leaves the input as it
    /// is. Returns `true` when a comment was added.
    pub fn submit_comment(&mut self, text: &str) -> bool {
        let today = Local::now().date_naive();
        self.submit_comment_on(text, today)
    }

    /// Same as [`submit_comment`](Self::submit_comment) with an explicit date.
    pub fn submit_comment_on(&mut self, text: &str, date: NaiveDate) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        let id = self.next_comment_id;
        self.next_comment_id += 1;
        self.post.comments.push(Comment::new(
            id,
            text,
            ANONYMOUS_AUTHOR,
            display_date(date),
        ));
        self.comment_input.clear();

        tracing::debug!(
            "Comment {} added to post '{}' ({} total)",
            id,
            self.post.title,
            self.post.comments.len()
        );
        true
    }

    /// Submit whatever is in the comment input buffer.
    pub fn submit_comment_input(&mut self) -> bool {
        let text = self.comment_input.clone();
        self.submit_comment(&text)
    }

    pub fn comment_input(&self) -> &str {
        &self.comment_input
    }

    pub fn set_comment_input(&mut self, text: impl Into<String>) {
        self.comment_input = text.into();
    }

    pub fn push_input_char(&mut self, c: char) {
        self.comment_input.push(c);
    }

    pub fn push_input_str(&mut self, text: &str) {
        // Comment input is a single line
        self.comment_input
            .extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
    }

    pub fn pop_input_char(&mut self) {
        self.comment_input.pop();
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all_comments = !self.show_all_comments;
    }

    pub fn is_showing_all(&self) -> bool {
        self.show_all_comments
    }

    /// Comments currently visible: all of them when expanded, otherwise the
    /// first [`COLLAPSED_COMMENT_COUNT`].
    pub fn displayed_comments(&self) -> &[Comment] {
        let comments = &self.post.comments;
        if self.show_all_comments {
            comments
        } else {
            &comments[..comments.len().min(COLLAPSED_COMMENT_COUNT)]
        }
    }

    /// Whether the expand/collapse control exists at all.
    pub fn has_hidden_comments(&self) -> bool {
        self.post.comments.len() > COLLAPSED_COMMENT_COUNT
    }

    /// Label for the expand/collapse control, `None` when it is not shown.
    pub fn show_toggle_label(&self) -> Option<String> {
        if !self.has_hidden_comments() {
            return None;
        }
        if self.show_all_comments {
            Some("Show less".to_string())
        } else {
            Some(format!("Show all {} comments", self.post.comments.len()))
        }
    }
}
