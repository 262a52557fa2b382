use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Glyph drawn in the first ruler column.
pub const RULER_MARKER: char = '·';

/// Ruler width when none is configured.
pub const DEFAULT_RULER_WIDTH: usize = 80;

/// Build a ruler `width` characters long.
///
/// Column `i` (1-based) shows the tens digit of `i` on multiples of ten,
/// `+` on other multiples of five, and `-` elsewhere; column 1 is always
/// [`RULER_MARKER`].
pub fn build_ruler(width: usize) -> String {
    (1..=width)
        .map(|i| {
            if i == 1 {
                RULER_MARKER
            } else if i % 10 == 0 {
                char::from_digit(u32::try_from((i / 10) % 10).unwrap_or(0), 10).unwrap_or('0')
            } else if i % 5 == 0 {
                '+'
            } else {
                '-'
            }
        })
        .collect()
}

pub fn render_ruler(ruler: &str, frame: &mut Frame, area: Rect) {
    let bar = Paragraph::new(ruler.to_string()).style(Style::default().fg(Color::Cyan));
    frame.render_widget(bar, area);
}
