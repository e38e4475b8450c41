//! Forum data models.
//!
//! - [`forum`] - Posts, comments and the assistant answer
//! - [`page`] - The closed set of navigable pages
//! - [`seed`] - Hardcoded seed content

pub mod forum;
pub mod page;
pub mod seed;

pub use forum::{
    AssistantAnswer, Comment, Post, Reference, VoteDirection, ANONYMOUS_AUTHOR,
};
pub use page::{NavGroup, Page};
pub use seed::{assistant_answer, seed_posts};
