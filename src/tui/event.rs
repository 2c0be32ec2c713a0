//! Terminal input events and their mapping onto menu events.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::menu::MenuEvent;

/// An input event relevant to the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Key(KeyEvent),
    /// Bracketed paste content
    Paste(String),
    Resize(u16, u16),
}

/// Blocking source of terminal events.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Block until the next relevant event.
    ///
    /// Key releases and repeats (reported on some platforms) are skipped.
    pub fn next(&self) -> io::Result<TuiEvent> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(TuiEvent::Key(key));
                }
                Event::Paste(content) => return Ok(TuiEvent::Paste(content)),
                Event::Resize(width, height) => return Ok(TuiEvent::Resize(width, height)),
                _ => {}
            }
        }
    }
}

/// Whether the key is one of the quit chords (Ctrl+C, Ctrl+Q).
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'q'))
}

/// Map a key press onto a selection event.
///
/// Every printable character feeds the search buffer, so letters are never
/// bound to navigation.
pub fn menu_event(key: &KeyEvent) -> Option<MenuEvent> {
    if is_interrupt(key) {
        return Some(MenuEvent::Cancel);
    }

    match key.code {
        KeyCode::Down | KeyCode::Tab => Some(MenuEvent::NavigateNext),
        KeyCode::Up | KeyCode::BackTab => Some(MenuEvent::NavigatePrevious),
        KeyCode::Enter => Some(MenuEvent::Confirm),
        KeyCode::Esc => Some(MenuEvent::Cancel),
        KeyCode::Backspace => Some(MenuEvent::Backspace),
        KeyCode::Char(c)
            if !c.is_control()
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(MenuEvent::PrintableChar(c))
        }
        _ => None,
    }
}
