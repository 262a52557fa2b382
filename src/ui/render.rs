use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::Model;

use super::{overlays, ruler, status};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub ruler: Rect,
    pub editor: Rect,
    pub toast: Option<Rect>,
    pub status: Rect,
    pub buttons: Rect,
}

/// Split `area` into ruler, text pane, optional toast row, status line and
/// function-key bar.
pub fn screen_layout(area: Rect, toast_active: bool) -> ScreenLayout {
    let toast_rows = u16::from(toast_active);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(toast_rows),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    ScreenLayout {
        ruler: chunks[0],
        editor: chunks[1],
        toast: toast_active.then_some(chunks[2]),
        status: chunks[3],
        buttons: chunks[4],
    }
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let layout = screen_layout(area, model.active_toast().is_some());

    ruler::render_ruler(&model.ruler, frame, layout.ruler);
    render_editor(model, frame, layout.editor);
    if let Some(toast_area) = layout.toast {
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, layout.status);
    status::render_function_key_bar(frame, layout.buttons);

    if let Some(dialog) = &model.dialog {
        overlays::render_dialog(dialog, frame, area);
    }
}

/// Text as drawn: control characters become blanks so every char keeps the
/// width `display_width` reports for it.
fn visible_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let buf = &model.session.buffer;
    let total_lines = buf.line_count();
    let visible_height = area.height as usize;
    let start = model.scroll_offset.min(total_lines.saturating_sub(1));
    let end = (start + visible_height).min(total_lines);
    let cursor = buf.cursor();
    let caret_style = Style::default().bg(Color::White).fg(Color::Black);

    let mut content: Vec<Line> = Vec::with_capacity(end.saturating_sub(start));
    for line_idx in start..end {
        let line_text = buf.line_at(line_idx).unwrap_or_default();
        if line_idx != cursor.line || model.dialog.is_some() {
            content.push(Line::raw(visible_text(&line_text)));
            continue;
        }

        // Split line at the caret so the caret cell can be drawn reversed
        let col = cursor.col.min(line_text.len());
        let before = &line_text[..col];
        let mut rest = line_text[col..].chars();
        let caret_char = rest.next();
        let after: String = rest.collect();

        let mut spans = Vec::with_capacity(3);
        if !before.is_empty() {
            spans.push(Span::raw(visible_text(before)));
        }
        let caret_cell = caret_char.map_or_else(|| " ".to_string(), |c| visible_text(&c.to_string()));
        spans.push(Span::styled(caret_cell, caret_style));
        if !after.is_empty() {
            spans.push(Span::raw(visible_text(&after)));
        }
        content.push(Line::from(spans));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);
}
