//! Status strip listing queued notices.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::{Notice, NoticeLevel};

/// Render notices inside a bordered block, one per line.
pub fn render_notices(notices: &[Notice], area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = notices
        .iter()
        .map(|notice| {
            let (marker, color) = match notice.level {
                NoticeLevel::Info => ("•", Color::Cyan),
                NoticeLevel::Success => ("✓", Color::Green),
                NoticeLevel::Error => ("✗", Color::Red),
            };
            Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(color)),
                Span::raw(notice.message.as_str()),
            ])
        })
        .collect();

    let border = if notices.iter().any(|n| n.level == NoticeLevel::Error) {
        Color::Red
    } else {
        Color::DarkGray
    };

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .render(area, buf);
}
