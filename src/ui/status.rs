use std::fmt::Display;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::actions::Action;
use crate::app::{Model, ToastLevel};
use crate::editor::{Position, locate};
use crate::session::EditorSession;

/// Format the status line: `Ln: {line} Col: {column} | {mode} | File: {filename}`.
pub fn format_status(line: usize, column: usize, mode: impl Display, filename: &str) -> String {
    format!("Ln: {line} Col: {column} | {mode} | File: {filename}")
}

/// The status line for `session`, derived from scratch on every call.
pub fn status_line(session: &EditorSession) -> String {
    let text = session.buffer.text();
    let pos = locate(&text, session.buffer.caret_offset()).unwrap_or_else(|err| {
        tracing::error!(%err, "caret outside document");
        Position::ORIGIN
    });
    format_status(pos.line, pos.column, session.mode, session.binding.name())
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let dirty = if model.session.buffer.is_dirty() { " *" } else { "" };
    let status = format!(" {}{dirty}", status_line(&model.session));
    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::Blue).fg(Color::White));
    frame.render_widget(status_bar, area);
}

/// Label for the function-key button of `action`, e.g. `F2 SAVE`.
pub fn button_label(action: Action) -> String {
    format!("F{} {}", action.function_key(), action.label())
}

/// Horizontal spans of each button, in [`Action::ALL`] order.
///
/// Buttons are laid out left to right with one blank column between them and
/// are clipped at `width`.
pub fn button_spans(x: u16, width: u16) -> Vec<(Action, u16, u16)> {
    let mut spans = Vec::with_capacity(Action::ALL.len());
    let end = x.saturating_add(width);
    let mut col = x;
    for action in Action::ALL {
        if col >= end {
            break;
        }
        let label_width = u16::try_from(button_label(action).len() + 2).unwrap_or(u16::MAX);
        let visible = label_width.min(end - col);
        spans.push((action, col, visible));
        col = col.saturating_add(label_width).saturating_add(1);
    }
    spans
}

pub fn render_function_key_bar(frame: &mut Frame, area: Rect) {
    let mut line = Vec::new();
    for (idx, action) in Action::ALL.into_iter().enumerate() {
        if idx > 0 {
            line.push(Span::raw(" "));
        }
        let style = if action.is_implemented() {
            Style::default().bg(Color::Gray).fg(Color::Black)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::Gray)
        };
        line.push(Span::styled(format!(" {} ", button_label(action)), style));
    }
    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
