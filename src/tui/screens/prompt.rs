//! Text prompt screen.
//!
//! Collects secret names and values. Values are typed into a masked field.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{
    event::{is_interrupt, TuiEvent},
    widgets::TextInput,
    AppResult, TuiApp,
};

/// Text prompt screen application.
pub struct PromptScreen {
    input: TextInput,
    prompt: String,
}

impl PromptScreen {
    pub fn new(prompt: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            input: TextInput::new(label),
            prompt: prompt.into(),
        }
    }

    /// Mask the typed characters.
    #[must_use]
    pub fn masked(mut self) -> Self {
        self.input = self.input.masked();
        self
    }
}

impl TuiApp for PromptScreen {
    type Output = String;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        match event {
            TuiEvent::Paste(content) => {
                self.input.insert_text(content);
                None
            }
            TuiEvent::Key(key) if is_interrupt(key) => Some(AppResult::Cancelled),
            TuiEvent::Key(key) => match key.code {
                // Empty input is not accepted
                KeyCode::Enter if self.input.is_empty() => None,
                KeyCode::Enter => Some(AppResult::Done(self.input.content().to_string())),
                KeyCode::Esc => Some(AppResult::Cancelled),
                _ => {
                    self.input.handle_key(*key);
                    None
                }
            },
            TuiEvent::Resize(..) => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [prompt_area, input_area, _, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(area);

        let prompt = Paragraph::new(self.prompt.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(prompt, prompt_area);

        self.input.render(input_area, frame.buffer_mut(), true);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" Confirm  "),
            Span::styled("Ctrl+U", Style::default().fg(Color::Cyan)),
            Span::raw(" Clear  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" Cancel"),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, help_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key_event(code: KeyCode) -> TuiEvent {
        TuiEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_empty_input_is_not_accepted() {
        let mut screen = PromptScreen::new("Name?", "Name");
        assert_eq!(screen.handle_event(&key_event(KeyCode::Enter)), None);
    }

    #[test]
    fn test_typed_text_is_returned() {
        let mut screen = PromptScreen::new("Name?", "Name");
        for c in "db/pass".chars() {
            screen.handle_event(&key_event(KeyCode::Char(c)));
        }
        assert_eq!(
            screen.handle_event(&key_event(KeyCode::Enter)),
            Some(AppResult::Done("db/pass".to_string()))
        );
    }

    #[test]
    fn test_paste_then_confirm() {
        let mut screen = PromptScreen::new("Value?", "Value").masked();
        screen.handle_event(&TuiEvent::Paste("s3cret".to_string()));
        assert_eq!(
            screen.handle_event(&key_event(KeyCode::Enter)),
            Some(AppResult::Done("s3cret".to_string()))
        );
    }

    #[test]
    fn test_cancel_keys() {
        let mut screen = PromptScreen::new("Name?", "Name");
        assert_eq!(
            screen.handle_event(&key_event(KeyCode::Esc)),
            Some(AppResult::Cancelled)
        );

        let mut screen = PromptScreen::new("Name?", "Name");
        let ctrl_q = TuiEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(screen.handle_event(&ctrl_q), Some(AppResult::Cancelled));
    }
}
