//! Page body: the heading and the post cards of the mounted page.
//!
//! A card is a bordered block with a vote gutter on the left and a text
//! column holding the title, body, comment count, the displayed comments,
//! the show-all toggle, the comment input and the Add Comment button.
//! Cards are stacked from the page's scroll offset; the last one may be
//! cut off by the bottom of the viewport.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::components::{render_button, render_input_field, ButtonKind, InputFieldConfig};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::new_post::render_new_post;
use super::text::{truncate_to_width, wrap_text};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};
use crate::app::{App, Focus};
use crate::models::{Comment, VoteDirection};
use crate::state::PostState;

/// Columns of the vote gutter
pub const GUTTER: u16 = 5;
pub const COMMENT_PLACEHOLDER: &str = "Add a comment...";
const ADD_COMMENT: &str = " Add Comment ";
/// Heading plus one blank row
const HEADING_ROWS: u16 = 2;
const INPUT_ROWS: u16 = 3;

/// Text column of a card, measured and styled.
struct CardText {
    lines: Vec<Line<'static>>,
    /// Row of the show-all toggle within `lines`
    toggle_row: Option<usize>,
}

fn comment_lines(comment: &Comment, width: usize, out: &mut Vec<Line<'static>>) {
    let bar = Span::styled("│ ", Style::default().fg(COLOR_BORDER));
    for line in wrap_text(&comment.content, width.saturating_sub(2)) {
        out.push(Line::from(vec![
            bar.clone(),
            Span::styled(line, Style::default().fg(COLOR_TEXT)),
        ]));
    }
    out.push(Line::from(vec![
        bar,
        Span::styled(
            truncate_to_width(&comment.byline(), width.saturating_sub(2)),
            Style::default().fg(COLOR_DIM),
        ),
    ]));
}

fn card_text(post: &PostState, width: usize, selected: bool) -> CardText {
    let mut lines = Vec::new();

    let title_style = Style::default()
        .fg(if selected { COLOR_ACCENT } else { COLOR_HEADER })
        .add_modifier(Modifier::BOLD);
    for line in wrap_text(&post.post().title, width) {
        lines.push(Line::from(Span::styled(line, title_style)));
    }
    for line in wrap_text(&post.post().body, width) {
        lines.push(Line::from(Span::styled(line, Style::default().fg(COLOR_TEXT))));
    }

    lines.push(Line::from(Span::styled(
        format!("{} comments", post.comments().len()),
        Style::default().fg(COLOR_DIM),
    )));

    for comment in post.displayed_comments() {
        comment_lines(comment, width, &mut lines);
    }

    let toggle_row = post.show_toggle_label().map(|label| {
        lines.push(Line::from(Span::styled(label, Style::default().fg(COLOR_ACCENT))));
        lines.len() - 1
    });

    CardText { lines, toggle_row }
}

/// Rows a card needs at `card_width`, borders included.
pub fn card_height(post: &PostState, card_width: u16) -> u16 {
    let width = LayoutContext::card_text_width(card_width, GUTTER) as usize;
    let text = card_text(post, width, false);
    let content = rows(text.lines.len())
        .saturating_add(INPUT_ROWS)
        .saturating_add(1);
    content.max(3).saturating_add(2)
}

/// Line count as terminal rows, clamped to `u16::MAX`.
fn rows(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

/// Index of the last post drawn whole when stacking from `offset`.
///
/// Returns `offset` when even that post does not fit.
fn last_fully_visible(heights: &[u16], offset: usize, viewport: u16) -> usize {
    let mut used: u16 = 0;
    let mut last = offset;
    for (i, height) in heights.iter().enumerate().skip(offset) {
        used = used.saturating_add(*height);
        if used > viewport {
            break;
        }
        last = i;
    }
    last
}

/// Scroll the mounted page so the selected post is drawn whole in `area`.
pub fn follow_selection(app: &mut App, area: Rect) {
    let viewport = area.height.saturating_sub(HEADING_ROWS);
    let heights: Vec<u16> = app
        .page()
        .posts()
        .iter()
        .map(|p| card_height(p, area.width))
        .collect();
    if heights.is_empty() {
        return;
    }

    let page = app.page_mut();
    loop {
        let before = page.scroll_offset();
        page.follow_selection(last_fully_visible(&heights, before, viewport));
        if page.scroll_offset() == before {
            break;
        }
    }
}

pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    registry: &mut HitAreaRegistry,
) {
    if area.height == 0 {
        return;
    }
    let heading = Line::from(Span::styled(
        app.page().heading(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(heading), Rect::new(area.x, area.y, area.width, 1));

    let body = Rect::new(
        area.x,
        area.y + HEADING_ROWS.min(area.height),
        area.width,
        area.height.saturating_sub(HEADING_ROWS),
    );
    if app.page().draft().is_some() {
        render_new_post(frame, body, app, registry);
    } else {
        render_posts(frame, body, app, registry);
    }
}

fn render_posts(frame: &mut Frame, area: Rect, app: &App, registry: &mut HitAreaRegistry) {
    let page = app.page();
    let bottom = area.y + area.height;
    let mut y = area.y;

    for (index, post) in page.posts().iter().enumerate().skip(page.scroll_offset()) {
        if y >= bottom {
            break;
        }
        let height = card_height(post, area.width);
        let rect = Rect::new(area.x, y, area.width, height.min(bottom - y));
        let selected = index == page.selected_index();
        let editing = selected && app.focus == Focus::CommentInput;
        let highlighted = selected && app.focus.is_page_focus();

        render_post_card(frame, rect, index, post, highlighted, editing, registry);
        y = y.saturating_add(height);
    }
}

fn render_post_card(
    frame: &mut Frame,
    rect: Rect,
    index: usize,
    post: &PostState,
    selected: bool,
    editing: bool,
    registry: &mut HitAreaRegistry,
) {
    registry.register(rect, ClickAction::SelectPost(index), None);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if selected { COLOR_ACCENT } else { COLOR_BORDER }));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    if inner.height == 0 || inner.width <= GUTTER {
        return;
    }
    let bottom = inner.y + inner.height;

    // Vote gutter
    render_button(
        frame,
        registry,
        inner,
        inner.x + 1,
        inner.y,
        "▲",
        ButtonKind::Ghost,
        ClickAction::Vote {
            post: index,
            direction: VoteDirection::Up,
        },
    );
    if inner.y + 1 < bottom {
        let count = format!("{:^width$}", post.vote_count(), width = GUTTER as usize);
        frame.render_widget(
            Paragraph::new(Span::styled(
                count,
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            )),
            Rect::new(inner.x, inner.y + 1, GUTTER, 1),
        );
    }
    render_button(
        frame,
        registry,
        inner,
        inner.x + 1,
        inner.y + 2,
        "▼",
        ButtonKind::Ghost,
        ClickAction::Vote {
            post: index,
            direction: VoteDirection::Down,
        },
    );

    // Text column
    let text_x = inner.x + GUTTER + 1;
    let text_width = LayoutContext::card_text_width(rect.width, GUTTER);
    let column = Rect::new(text_x, inner.y, text_width, inner.height);
    let text = card_text(post, text_width as usize, selected);
    let text_rows = rows(text.lines.len());

    frame.render_widget(Paragraph::new(text.lines), column);

    if let (Some(row), Some(label)) = (text.toggle_row, post.show_toggle_label()) {
        let y = inner.y.saturating_add(rows(row));
        if y < bottom {
            let rect = Rect::new(text_x, y, (label.width() as u16).min(text_width), 1);
            registry.register(
                rect,
                ClickAction::ToggleComments(index),
                Some(Style::default().add_modifier(Modifier::UNDERLINED)),
            );
            if let Some(hover) = registry.get_hover_style(rect) {
                frame.buffer_mut().set_style(rect, hover);
            }
        }
    }

    let input_y = inner.y.saturating_add(text_rows);
    if input_y.saturating_add(INPUT_ROWS) <= bottom {
        let input = Rect::new(text_x, input_y, text_width, INPUT_ROWS);
        let field = InputFieldConfig::new(post.comment_input())
            .focused(editing)
            .placeholder(COMMENT_PLACEHOLDER);
        render_input_field(frame, input, &field);
        registry.register(input, ClickAction::FocusComment(index), None);
    }

    render_button(
        frame,
        registry,
        inner,
        text_x,
        input_y.saturating_add(INPUT_ROWS),
        ADD_COMMENT,
        ButtonKind::Primary,
        ClickAction::SubmitComment(index),
    );
}
