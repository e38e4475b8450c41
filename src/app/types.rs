//! Type definitions for the application state.
//!
//! - [`Focus`] - Which UI component receives keyboard input

/// Represents which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Header navigation tabs and sidebar topics
    #[default]
    Navigation,
    /// Header search box
    Search,
    /// Assistant query field
    Assistant,
    /// Post list on a posts page
    Posts,
    /// Comment input of the selected post
    CommentInput,
    /// Title field of the New Post form
    NewPostTitle,
    /// Content field of the New Post form
    NewPostContent,
}

impl Focus {
    /// Whether printable keys are inserted as text in this focus.
    pub fn is_text_input(self) -> bool {
        matches!(
            self,
            Focus::Search
                | Focus::Assistant
                | Focus::CommentInput
                | Focus::NewPostTitle
                | Focus::NewPostContent
        )
    }

    /// Whether this focus belongs to the mounted page rather than the shell.
    pub fn is_page_focus(self) -> bool {
        matches!(
            self,
            Focus::Posts | Focus::CommentInput | Focus::NewPostTitle | Focus::NewPostContent
        )
    }
}
