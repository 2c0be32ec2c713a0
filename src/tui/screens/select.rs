//! List selection screen with incremental search.

use std::fmt::Debug;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    menu::{MenuEvent, Outcome, SelectionEngine},
    tui::{
        event::{menu_event, TuiEvent},
        widgets::SelectList,
        AppResult, TuiApp,
    },
};

/// Selection screen application.
pub struct SelectScreen<T> {
    engine: SelectionEngine<T>,
    prompt: String,
    header: Option<String>,
}

impl<T> SelectScreen<T> {
    pub fn new(prompt: impl Into<String>, engine: SelectionEngine<T>) -> Self {
        Self {
            engine,
            prompt: prompt.into(),
            header: None,
        }
    }

    /// Show a block of text between the prompt and the list.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub const fn engine(&self) -> &SelectionEngine<T> {
        &self.engine
    }
}

impl<T: Clone + PartialEq + Debug> SelectScreen<T> {
    fn apply(&mut self, event: MenuEvent) -> Option<AppResult<T>> {
        match self.engine.apply(event) {
            Outcome::Answered(value) => Some(AppResult::Done(value)),
            Outcome::Cancelled => Some(AppResult::Cancelled),
            Outcome::Pending => None,
        }
    }
}

impl<T: Clone + PartialEq + Debug> TuiApp for SelectScreen<T> {
    type Output = T;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        match event {
            TuiEvent::Key(key) => menu_event(key).and_then(|e| self.apply(e)),
            TuiEvent::Paste(content) => {
                for c in content.chars().filter(|c| !c.is_control()) {
                    self.apply(MenuEvent::PrintableChar(c));
                }
                None
            }
            TuiEvent::Resize(..) => None,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header_height = self
            .header
            .as_ref()
            .map_or(0, |h| h.lines().count() as u16);
        let view = self.engine.view();
        let search_height = u16::from(view.search_echo.is_some());

        let [prompt_area, header_area, list_area, search_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(header_height),
            Constraint::Min(3),
            Constraint::Length(search_height),
            Constraint::Length(3),
        ])
        .areas(area);

        // Prompt
        let prompt = Paragraph::new(Line::from(vec![
            Span::styled("? ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(
                self.prompt.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(prompt, prompt_area);

        if let Some(header) = &self.header {
            let header = Paragraph::new(header.as_str()).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(header, header_area);
        }

        SelectList::new(&view, "Select").render(list_area, frame.buffer_mut(), true);

        if let Some(search) = &view.search_echo {
            let echo = Paragraph::new(Line::from(vec![
                Span::styled(" / ", Style::default().fg(Color::Cyan)),
                Span::styled(search.as_str(), Style::default().fg(Color::Yellow)),
                Span::styled("...", Style::default().fg(Color::Cyan)),
            ]));
            frame.render_widget(echo, search_area);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("↑↓", Style::default().fg(Color::Cyan)),
            Span::raw(" Move  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" Select  "),
            Span::styled("Type", Style::default().fg(Color::Cyan)),
            Span::raw(" Search  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, help_area);
    }
}
