//! Confirmation dialog screen.
//!
//! A yes/no modal dialog for confirming destructive actions, driven by a
//! two-entry selection session.

use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    constants::{CONFIRM_NO_LABEL, CONFIRM_YES_LABEL},
    error::ConstructionError,
    menu::{Choice, MenuEvent, Outcome, SelectionEngine},
    tui::{
        event::{menu_event, TuiEvent},
        AppResult, TuiApp,
    },
};

/// Confirmation dialog state.
pub struct ConfirmDialog {
    message: String,
    engine: SelectionEngine<bool>,
}

impl ConfirmDialog {
    /// Create a dialog with `default` preselected.
    pub fn new(message: impl Into<String>, default: bool) -> Result<Self, ConstructionError> {
        let choices = vec![
            Choice::new(CONFIRM_YES_LABEL, true),
            Choice::new(CONFIRM_NO_LABEL, false),
        ];
        Ok(Self {
            message: message.into(),
            engine: SelectionEngine::new(choices, Some(&default))?,
        })
    }

    /// Currently highlighted answer, `None` if the search hides both.
    pub fn selected(&self) -> Option<bool> {
        self.engine.selected_value().copied()
    }

    /// Calculate the popup dimensions based on content.
    #[allow(clippy::cast_possible_truncation)]
    fn popup_size(&self) -> (u16, u16) {
        let msg_width = self.message.width() as u16;
        // Width: message width + padding, minimum for buttons
        let width = msg_width.max(24) + 4;
        // Height: message + buttons + search echo + borders
        (width, 6)
    }

    fn render_popup(&self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.popup_size();
        let popup_area = centered_rect(width, height, area);

        // Dim the background
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::DIM),
                    );
                }
            }
        }

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Confirm ");

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        Paragraph::new(self.message.as_str())
            .render(Rect::new(inner.x, inner.y, inner.width, 1), buf);

        let view = self.engine.view();
        let mut spans = vec![Span::raw("  ")];
        for line in &view.lines {
            let (text, style) = if line.highlighted {
                let color = if line.text == CONFIRM_YES_LABEL {
                    Color::Green
                } else {
                    Color::Red
                };
                (
                    format!("[{}]", line.text),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    format!(" {} ", line.text),
                    Style::default().fg(Color::DarkGray),
                )
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw("   "));
        }
        Paragraph::new(Line::from(spans))
            .render(Rect::new(inner.x, inner.y + 2, inner.width, 1), buf);

        if let Some(search) = &view.search_echo {
            Paragraph::new(format!("  / {search}..."))
                .style(Style::default().fg(Color::Yellow))
                .render(Rect::new(inner.x, inner.y + 3, inner.width, 1), buf);
        }
    }
}

impl TuiApp for ConfirmDialog {
    type Output = bool;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        let TuiEvent::Key(key) = event else {
            return None;
        };

        // Buttons are laid out horizontally
        let menu = match key.code {
            KeyCode::Left => Some(MenuEvent::NavigatePrevious),
            KeyCode::Right => Some(MenuEvent::NavigateNext),
            _ => menu_event(key),
        }?;

        match self.engine.apply(menu) {
            Outcome::Answered(answer) => Some(AppResult::Done(answer)),
            Outcome::Cancelled => Some(AppResult::Cancelled),
            Outcome::Pending => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.render_popup(area, frame.buffer_mut());
    }
}

/// Calculate a centered rectangle within the given area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
