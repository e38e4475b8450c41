//! "Create a New Post" form.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use super::components::{render_button, render_input_field, ButtonKind, InputFieldConfig};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::COLOR_HEADER;
use crate::app::{App, Focus};
use crate::state::DraftField;

pub const TITLE_PLACEHOLDER: &str = "Enter your post title";
pub const CONTENT_PLACEHOLDER: &str = "Enter your post content";
const SUBMIT_LABEL: &str = " Submit Post ";

/// Content field rows (borders included) when there is room
const CONTENT_ROWS: u16 = 8;
/// Rows other than the content field: labels, title field, gaps, button
const FIXED_ROWS: u16 = 1 + 3 + 1 + 1 + 1 + 1;

pub fn render_new_post(frame: &mut Frame, area: Rect, app: &App, registry: &mut HitAreaRegistry) {
    let Some(draft) = app.page().draft() else {
        return;
    };
    let bottom = area.y + area.height;
    let width = area.width.saturating_sub(1);
    let mut y = area.y;

    if y < bottom {
        render_label(frame, Rect::new(area.x, y, width, 1), "Title");
    }
    y += 1;
    if y + 3 <= bottom {
        let rect = Rect::new(area.x, y, width, 3);
        let field = InputFieldConfig::new(&draft.title)
            .focused(app.focus == Focus::NewPostTitle)
            .placeholder(TITLE_PLACEHOLDER);
        render_input_field(frame, rect, &field);
        registry.register(rect, ClickAction::FocusDraft(DraftField::Title), None);
    }
    y += 4;

    if y < bottom {
        render_label(frame, Rect::new(area.x, y, width, 1), "Content");
    }
    y += 1;
    let content_rows = CONTENT_ROWS.min(area.height.saturating_sub(FIXED_ROWS)).max(3);
    if y + content_rows <= bottom {
        let rect = Rect::new(area.x, y, width, content_rows);
        let field = InputFieldConfig::new(&draft.content)
            .focused(app.focus == Focus::NewPostContent)
            .placeholder(CONTENT_PLACEHOLDER)
            .multiline(true);
        render_input_field(frame, rect, &field);
        registry.register(rect, ClickAction::FocusDraft(DraftField::Content), None);
    }
    y += content_rows + 1;

    render_button(
        frame,
        registry,
        area,
        area.x,
        y,
        SUBMIT_LABEL,
        ButtonKind::Primary,
        ClickAction::SubmitDraft,
    );
}

fn render_label(frame: &mut Frame, row: Rect, text: &'static str) {
    let style = Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(Span::styled(text, style)), row);
}
