//! Scrollable list rendering of a selection session.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::menu::{MenuView, ViewLine};

/// Renders a [`MenuView`] as a bordered list.
pub struct SelectList<'a> {
    view: &'a MenuView,
    title: &'a str,
}

impl<'a> SelectList<'a> {
    pub const fn new(view: &'a MenuView, title: &'a str) -> Self {
        Self { view, title }
    }

    fn item(line: &ViewLine) -> ListItem<'_> {
        let style = if line.separator || line.disabled {
            // Disabled items shown dimmed
            Style::default().fg(Color::DarkGray)
        } else if line.highlighted {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let prefix = if line.highlighted { "> " } else { "  " };
        ListItem::new(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(line.text.as_str(), style),
        ]))
    }

    /// Render the widget.
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(if self.title.is_empty() {
                String::new()
            } else {
                format!(" {} ", self.title)
            });

        if self.view.lines.is_empty() {
            Paragraph::new("No matching entries.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self.view.lines.iter().map(Self::item).collect();
        let mut state =
            ListState::default().with_selected(self.view.lines.iter().position(|l| l.highlighted));

        StatefulWidget::render(List::new(items).block(block), area, buf, &mut state);
    }
}
