use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::app::Dialog;

pub fn render_dialog(dialog: &Dialog, frame: &mut Frame, area: Rect) {
    match dialog {
        Dialog::Notice { title, body } => render_notice(title, body, frame, area),
        Dialog::ConfirmExit => render_confirm_exit(frame, area),
        Dialog::OpenFile { input } => render_open_file(input, frame, area),
    }
}

fn render_notice(title: &str, body: &str, frame: &mut Frame, area: Rect) {
    let dim_style = Style::default().fg(Color::Indexed(245));
    let mut lines: Vec<Line> = body.lines().map(|l| Line::raw(l.to_string())).collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled("Press any key to continue", dim_style));

    // 2 border rows + 2 padding rows
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(4);
    let popup = centered_popup_rect(area.width.saturating_sub(16).max(44), height, area);
    render_popup(title, lines, frame, popup);
}

fn render_confirm_exit(frame: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::raw("Are you sure you want to exit? Unsaved changes will be lost."),
        Line::raw(""),
        Line::from(vec![
            Span::styled("y", key_style),
            Span::raw(" / Enter: exit    "),
            Span::styled("n", key_style),
            Span::raw(" / Esc: cancel"),
        ]),
    ];
    let popup = centered_popup_rect(area.width.saturating_sub(12).max(48), 7, area);
    render_popup("Exit", lines, frame, popup);
}

fn render_open_file(input: &str, frame: &mut Frame, area: Rect) {
    let dim_style = Style::default().fg(Color::Indexed(245));
    let lines = vec![
        Line::raw("Path of the text file to load:"),
        Line::from(vec![
            Span::raw("> "),
            Span::raw(input.to_string()),
            Span::styled(" ", Style::default().bg(Color::White)),
        ]),
        Line::raw(""),
        Line::styled("Enter loads · Esc cancels", dim_style),
    ];
    let popup = centered_popup_rect(area.width.saturating_sub(16).max(44), 8, area);
    render_popup("Load", lines, frame, popup);
}

fn render_popup(title: &str, lines: Vec<Line<'_>>, frame: &mut Frame, popup: Rect) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .padding(Padding::new(2, 2, 1, 1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup,
    );
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
