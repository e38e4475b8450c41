//! View state owned by the forum components.
//!
//! - [`post`] - Per-post votes, comments and comment input
//! - [`page`] - The mounted page container
//! - [`new_post`] - The New Post form draft
//! - [`assistant`] - The simulated assistant request/response cycle

pub mod assistant;
pub mod new_post;
pub mod page;
pub mod post;

pub use assistant::{AssistantPanel, AssistantPhase, DEFAULT_REPLY_DELAY};
pub use new_post::{DraftField, NewPostDraft};
pub use page::PageContainer;
pub use post::{display_date, PostState, COLLAPSED_COMMENT_COUNT};
