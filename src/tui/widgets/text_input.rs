//! Single-line text input widget with optional masking.
//!
//! Fully supports UTF-8 input including multi-byte characters.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::constants::SECRET_MASK_CHAR;

/// Single-line text input with cursor.
///
/// The cursor position is tracked as a character index (not byte index).
#[derive(Debug, Clone)]
pub struct TextInput {
    content: String,
    /// Cursor position as character index (0 = before first char)
    cursor: usize,
    label: String,
    /// Render every character as a mask glyph
    masked: bool,
}

impl TextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            label: label.into(),
            masked: false,
        }
    }

    /// Hide the typed characters.
    #[must_use]
    pub const fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    #[must_use]
    pub fn with_initial(mut self, value: impl Into<String>) -> Self {
        self.content = value.into();
        self.cursor = self.char_count();
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map_or(self.content.len(), |(i, _)| i)
    }

    /// Insert pasted text at the cursor, flattened to a single line.
    pub fn insert_text(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(if c == '\n' || c == '\r' { ' ' } else { c });
        }
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    fn remove_at(&mut self, char_idx: usize) {
        let at = self.byte_index(char_idx);
        self.content.remove(at);
    }

    /// Handle a key event. Returns `true` if the event was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            // Ctrl+U: clear line
            KeyCode::Char('u') if ctrl => {
                self.content.clear();
                self.cursor = 0;
            }
            KeyCode::Char(_) if ctrl => return false,
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.remove_at(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.char_count() => self.remove_at(self.cursor),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_count(),
            KeyCode::Backspace | KeyCode::Delete => {}
            _ => return false,
        }
        true
    }

    /// Content as displayed: masked or verbatim.
    fn display(&self) -> String {
        if self.masked {
            std::iter::repeat(SECRET_MASK_CHAR)
                .take(self.char_count())
                .collect()
        } else {
            self.content.clone()
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.label));

        let inner = block.inner(area);
        block.render(area, buf);

        let shown = self.display();
        if !focused {
            Paragraph::new(shown).render(inner, buf);
            return;
        }

        let before: String = shown.chars().take(self.cursor).collect();
        let cursor_char = shown.chars().nth(self.cursor).unwrap_or(' ');
        let after: String = shown.chars().skip(self.cursor + 1).collect();

        let line = Line::from(vec![
            Span::raw(before),
            Span::styled(
                cursor_char.to_string(),
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(after),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
