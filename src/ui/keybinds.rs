//! Contextual keybind hints shown on the bottom row.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::app::{App, Focus};

fn hints_for(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.assistant.is_dialog_open() {
        return vec![("[Esc]", "close"), ("[click]", "outside to close")];
    }

    let mut hints = match app.focus {
        Focus::Navigation => vec![
            ("[←→]", "move"),
            ("[Enter]", "open"),
            ("[1-8]", "jump"),
        ],
        Focus::Search => vec![("[Esc]", "back")],
        Focus::Assistant => {
            let mut hints = vec![("[Enter]", "ask")];
            if app.assistant.query().is_empty() && app.assistant.answer().is_some() {
                hints.push(("[o]", "open answer"));
            }
            hints.push(("[Esc]", "back"));
            hints
        }
        Focus::Posts => vec![
            ("[↑↓]", "select"),
            ("[u/d]", "vote"),
            ("[c]", "comments"),
            ("[Enter]", "comment"),
        ],
        Focus::CommentInput => vec![("[Enter]", "post comment"), ("[Esc]", "cancel")],
        Focus::NewPostTitle => vec![("[Enter]", "content"), ("[Ctrl+S]", "submit"), ("[Esc]", "back")],
        Focus::NewPostContent => vec![("[Enter]", "newline"), ("[Ctrl+S]", "submit"), ("[Esc]", "back")],
    };

    hints.push(("[Tab]", "next"));
    if !app.focus.is_text_input() {
        hints.push(("[q]", "quit"));
    }
    hints
}

/// Build keybind hints for the current focus.
///
/// On extra small terminals only the first two hints are shown.
pub fn build_keybinds(app: &App, ctx: &LayoutContext) -> Line<'static> {
    let mut hints = hints_for(app);
    if ctx.is_extra_small() {
        hints.truncate(2);
    }

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(key, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}
