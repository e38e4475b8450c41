//! Assistant panel rendering: the query card, the answer preview and the
//! answer dialog.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::components::{
    button_width, dialog_rect, render_button, render_dialog_frame, render_input_field,
    render_status_indicator, ButtonKind, DialogFrameConfig, InputFieldConfig, StatusIndicatorType,
};
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::text::{truncate_to_width, wrap_text};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CARD_BG, COLOR_DIM, COLOR_HEADER, COLOR_HOVER_BG, COLOR_TEXT,
};
use crate::app::{App, Focus};
use crate::models::AssistantAnswer;

pub const PANEL_TITLE: &str = "ShipTalk AI Assistant";
pub const QUERY_PLACEHOLDER: &str = "Ask a shipping question...";
pub const RELATED_HEADING: &str = "Related Discussions:";
const SEND_LABEL: &str = "➤";
const LOADING_MESSAGE: &str = "Thinking...";
const CLOSE_LABEL: &str = " Close ";

/// Rows of the query field
const INPUT_HEIGHT: u16 = 3;
/// Rows of the answer preview card on roomy terminals
const PREVIEW_HEIGHT: u16 = 5;

fn preview_height(ctx: &LayoutContext) -> u16 {
    if ctx.is_short() {
        1
    } else {
        PREVIEW_HEIGHT
    }
}

/// Total rows the panel needs, borders included.
pub fn panel_height(app: &App, ctx: &LayoutContext) -> u16 {
    let mut height = 2 + INPUT_HEIGHT;
    if app.assistant.is_loading() {
        height += 1;
    }
    if app.assistant.answer().is_some() {
        height += preview_height(ctx);
    }
    height
}

pub fn render_assistant_panel(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    registry: &mut HitAreaRegistry,
    ctx: &LayoutContext,
) {
    let focused = app.focus == Focus::Assistant;
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", PANEL_TITLE),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { COLOR_ACCENT } else { COLOR_BORDER }));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // Query row: [input field] [send]
    let send_width = button_width(SEND_LABEL);
    let input = Rect::new(
        inner.x,
        inner.y,
        inner.width.saturating_sub(send_width + 1),
        INPUT_HEIGHT.min(inner.height),
    );
    let field = InputFieldConfig::new(app.assistant.query())
        .focused(focused)
        .placeholder(QUERY_PLACEHOLDER);
    render_input_field(frame, input, &field);
    registry.register(input, ClickAction::FocusAssistant, None);

    let send_kind = if app.assistant.is_loading() {
        ButtonKind::Disabled
    } else {
        ButtonKind::Primary
    };
    render_button(
        frame,
        registry,
        inner,
        input.x + input.width + 1,
        input.y + input.height / 2,
        SEND_LABEL,
        send_kind,
        ClickAction::SubmitAssistant,
    );

    let mut y = inner.y + INPUT_HEIGHT;
    let bottom = inner.y + inner.height;

    if app.assistant.is_loading() && y < bottom {
        let spinner = StatusIndicatorType::spinner(LOADING_MESSAGE, app.tick_count);
        frame.render_widget(
            Paragraph::new(render_status_indicator(&spinner)),
            Rect::new(inner.x + 1, y, inner.width.saturating_sub(1), 1),
        );
        y += 1;
    }

    if let Some(answer) = app.assistant.answer() {
        let height = preview_height(ctx).min(bottom.saturating_sub(y));
        if height > 0 {
            render_answer_preview(frame, Rect::new(inner.x, y, inner.width, height), answer, registry);
        }
    }
}

fn render_answer_preview(
    frame: &mut Frame,
    area: Rect,
    answer: &AssistantAnswer,
    registry: &mut HitAreaRegistry,
) {
    registry.register(
        area,
        ClickAction::OpenAnswer,
        Some(Style::default().bg(COLOR_HOVER_BG)),
    );
    let background = registry
        .get_hover_style(area)
        .unwrap_or_else(|| Style::default().bg(COLOR_CARD_BG));

    let title_style = Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD);

    if area.height == 1 {
        let line = Line::from(vec![
            Span::styled("★ ", title_style),
            Span::styled(
                truncate_to_width(&answer.title, area.width.saturating_sub(2) as usize),
                title_style,
            ),
        ]);
        frame.render_widget(Paragraph::new(line).style(background), area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(background);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(2) as usize;
    let related: Vec<&str> = answer.references.iter().map(|r| r.title.as_str()).collect();
    let lines = vec![
        Line::from(Span::styled(truncate_to_width(&answer.title, width), title_style)),
        Line::from(Span::styled(
            truncate_to_width(&answer.body, width),
            Style::default().fg(COLOR_TEXT),
        )),
        Line::from(vec![
            Span::styled(RELATED_HEADING, Style::default().fg(COLOR_DIM)),
            Span::raw(" "),
            Span::styled(
                truncate_to_width(
                    &related.join(", "),
                    width.saturating_sub(RELATED_HEADING.len() + 1),
                ),
                Style::default().fg(COLOR_ACCENT),
            ),
        ]),
    ];
    let text_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
    frame.render_widget(Paragraph::new(lines), text_area);
}

/// Full-answer overlay. Registered last so it shadows everything else.
pub fn render_answer_dialog(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    registry: &mut HitAreaRegistry,
    ctx: &LayoutContext,
) {
    let Some(answer) = app.assistant.answer() else {
        return;
    };

    // Clicking the backdrop closes the dialog
    registry.register(area, ClickAction::CloseAnswer, None);

    let probe = dialog_rect(area, ctx, &DialogFrameConfig::new(&answer.title, 0));
    let text_width = probe.width.saturating_sub(4).max(1) as usize;
    let body = wrap_text(&answer.body, text_width);

    // body, blank, heading, references, blank, close button
    let content_height = body.len() as u16 + 2 + answer.references.len() as u16 + 2;
    let config = DialogFrameConfig::new(&answer.title, content_height);
    let outer = dialog_rect(area, ctx, &config);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    // Clicks inside the frame that miss a control are swallowed
    registry.register(outer, ClickAction::OpenAnswer, None);

    let content = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
    let bottom = content.y + content.height;

    let mut lines: Vec<Line> = body
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(COLOR_TEXT))))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        RELATED_HEADING,
        Style::default().fg(COLOR_DIM),
    )));
    let references_top = content.y + lines.len() as u16;
    frame.render_widget(Paragraph::new(lines), content);

    for (i, reference) in answer.references.iter().enumerate() {
        let y = references_top + i as u16;
        if y >= bottom {
            break;
        }
        let label = truncate_to_width(&format!("• {}", reference.title), content.width as usize);
        let rect = Rect::new(content.x, y, (label.width() as u16).min(content.width), 1);
        registry.register(
            rect,
            ClickAction::OpenReference(reference.id.clone()),
            Some(Style::default().add_modifier(Modifier::UNDERLINED)),
        );
        let style = Style::default().fg(COLOR_ACCENT);
        let style = registry
            .get_hover_style(rect)
            .map(|h| style.patch(h))
            .unwrap_or(style);
        frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
    }

    if content.height > 0 {
        let close_x = (content.x + content.width).saturating_sub(button_width(CLOSE_LABEL));
        render_button(
            frame,
            registry,
            content,
            close_x,
            bottom - 1,
            CLOSE_LABEL,
            ButtonKind::Ghost,
            ClickAction::CloseAnswer,
        );
    }
}
