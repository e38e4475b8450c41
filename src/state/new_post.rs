//! Draft state for the "Create a New Post" page.

/// Which field of the draft receives typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Title,
    Content,
}

/// Title and content being composed on the New Post page.
///
/// There is nowhere to publish to: submitting only resets the form.
#[derive(Debug, Clone, Default)]
pub struct NewPostDraft {
    pub title: String,
    pub content: String,
    pub field: DraftField,
}

impl NewPostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    fn active_mut(&mut self) -> &mut String {
        match self.field {
            DraftField::Title => &mut self.title,
            DraftField::Content => &mut self.content,
        }
    }

    pub fn focus(&mut self, field: DraftField) {
        self.field = field;
    }

    pub fn next_field(&mut self) {
        self.field = match self.field {
            DraftField::Title => DraftField::Content,
            DraftField::Content => DraftField::Title,
        };
    }

    pub fn push_char(&mut self, c: char) {
        // Title is single-line; content keeps `\n` but not a pasted `\r`
        if c == '\r' || (c == '\n' && self.field == DraftField::Title) {
            return;
        }
        self.active_mut().push(c);
    }

    pub fn push_str(&mut self, text: &str) {
        for c in text.chars() {
            self.push_char(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.active_mut().pop();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }

    /// Reset the form, returning the submitted title for logging.
    pub fn submit(&mut self) -> String {
        let title = std::mem::take(&mut self.title);
        self.content.clear();
        self.field = DraftField::Title;
        tracing::info!("New post form submitted (title='{}'); nothing is published", title);
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_goes_to_active_field() {
        let mut draft = NewPostDraft::new();
        draft.push_str("Pallets");
        draft.next_field();
        draft.push_str("How do you wrap them?");
        assert_eq!(draft.title, "Pallets");
        assert_eq!(draft.content, "How do you wrap them?");
    }

    #[test]
    fn test_title_rejects_newlines() {
        let mut draft = NewPostDraft::new();
        draft.push_str("a\nb");
        assert_eq!(draft.title, "ab");
        draft.focus(DraftField::Content);
        draft.push_str("x\ny");
        assert_eq!(draft.content, "x\ny");
    }

    #[test]
    fn test_pasted_crlf_leaves_no_carriage_return() {
        let mut draft = NewPostDraft::new();
        draft.push_str("Freight\r\nclaims");
        assert_eq!(draft.title, "Freightclaims");
        draft.focus(DraftField::Content);
        draft.push_str("line one\r\nline two");
        assert_eq!(draft.content, "line one\nline two");
    }

    #[test]
    fn test_backspace() {
        let mut draft = NewPostDraft::new();
        draft.push_str("abc");
        draft.pop_char();
        assert_eq!(draft.title, "ab");
        draft.focus(DraftField::Content);
        draft.pop_char();
        assert_eq!(draft.content, "");
    }

    #[test]
    fn test_submit_resets_form() {
        let mut draft = NewPostDraft::new();
        draft.push_str("Title");
        draft.focus(DraftField::Content);
        draft.push_str("Body");
        assert_eq!(draft.submit(), "Title");
        assert!(draft.is_empty());
        assert_eq!(draft.field, DraftField::Title);
    }
}
