//! Forum data types: posts, comments and the assistant answer.

use serde::{Deserialize, Serialize};

/// Author recorded on every comment submitted from the TUI.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous User";

/// A single reply attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Identifier, distinct within the owning post
    pub id: u64,
    /// Comment text as typed
    pub content: String,
    /// Display name of the author
    pub author: String,
    /// Creation date, already formatted for display
    pub date: String,
}

impl Comment {
    pub fn new(
        id: u64,
        content: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            author: author.into(),
            date: date.into(),
        }
    }

    /// Footer line shown under the comment text.
    pub fn byline(&self) -> String {
        format!("Posted by {} on {}", self.author, self.date)
    }
}

/// A forum topic entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Position of the post within its page
    pub id: usize,
    pub title: String,
    pub body: String,
    /// Net votes. Unbounded in both directions.
    pub vote_count: i64,
    /// Comments in insertion order
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Largest comment id currently attached, 0 when there are none.
    pub fn max_comment_id(&self) -> u64 {
        self.comments.iter().map(|c| c.id).max().unwrap_or(0)
    }
}

/// Direction of a vote button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Signed change applied to a vote count.
    pub fn delta(self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }
}

/// A related discussion linked from the assistant answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    /// URL-style slug
    pub id: String,
}

/// The canned reply shown by the assistant panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantAnswer {
    pub title: String,
    pub body: String,
    pub references: Vec<Reference>,
}
