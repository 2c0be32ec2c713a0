//! Scripted frontend for driving menus without a terminal.
//!
//! Feeds a fixed sequence of key events and renders every frame onto an
//! in-memory backend, so whole navigation flows can be exercised in tests.

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use crate::{
    error::Result,
    tui::{drive, event::TuiEvent, AppResult, Frontend, Notice, TuiApp},
};

const DEFAULT_WIDTH: u16 = 80;
const DEFAULT_HEIGHT: u16 = 24;

/// Frontend that replays a queue of events.
///
/// When the queue runs dry mid-session the session ends as a cancellation,
/// like closing the terminal.
#[derive(Debug)]
pub struct ScriptedFrontend {
    events: VecDeque<TuiEvent>,
    width: u16,
    height: u16,
    pending: Vec<Notice>,
    notices: Vec<Notice>,
    screens: Vec<String>,
    sessions: usize,
}

impl Default for ScriptedFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedFrontend {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pending: Vec::new(),
            notices: Vec::new(),
            screens: Vec::new(),
            sessions: 0,
        }
    }

    /// Set the virtual screen size.
    #[must_use]
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Queue a raw event.
    pub fn push(&mut self, event: TuiEvent) {
        self.events.push_back(event);
    }

    /// Queue a plain key press.
    #[must_use]
    pub fn key(mut self, code: KeyCode) -> Self {
        self.push(TuiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
        self
    }

    /// Queue a Ctrl+`c` chord.
    #[must_use]
    pub fn ctrl(mut self, c: char) -> Self {
        self.push(TuiEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )));
        self
    }

    /// Queue one key press per character.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        for c in text.chars() {
            self = self.key(KeyCode::Char(c));
        }
        self
    }

    #[must_use]
    pub fn down(self) -> Self {
        self.key(KeyCode::Down)
    }

    #[must_use]
    pub fn up(self) -> Self {
        self.key(KeyCode::Up)
    }

    #[must_use]
    pub fn enter(self) -> Self {
        self.key(KeyCode::Enter)
    }

    #[must_use]
    pub fn esc(self) -> Self {
        self.key(KeyCode::Esc)
    }

    #[must_use]
    pub fn backspace(self) -> Self {
        self.key(KeyCode::Backspace)
    }

    /// Every notice received so far, in order.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Text of every rendered frame, in order.
    pub fn screens(&self) -> &[String] {
        &self.screens
    }

    pub fn last_screen(&self) -> Option<&str> {
        self.screens.last().map(String::as_str)
    }

    /// Number of sessions started.
    pub const fn sessions(&self) -> usize {
        self.sessions
    }

    /// Events not consumed yet.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl Frontend for ScriptedFrontend {
    fn run<A: TuiApp>(&mut self, app: A) -> Result<AppResult<A::Output>> {
        self.sessions += 1;
        let mut terminal = Terminal::new(TestBackend::new(self.width, self.height))?;
        let notices = std::mem::take(&mut self.pending);
        let events = &mut self.events;
        let screens = &mut self.screens;

        drive(
            &mut terminal,
            || Ok(events.pop_front()),
            app,
            &notices,
            |buffer| screens.push(buffer_text(buffer)),
        )
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice.clone());
        self.pending.push(notice);
    }
}

/// Flatten a buffer into newline-separated rows.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()));
        }
        text.push('\n');
    }
    text
}
