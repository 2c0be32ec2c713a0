//! Terminal User Interface module for password-organizer.
//!
//! Provides the event-loop contract shared by every interactive screen and
//! the frontends that drive it.

pub mod event;
pub mod frontend;
pub mod screens;
pub mod scripted;
pub mod terminal;
pub mod widgets;

use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};

use crate::{error::Result, tui::event::TuiEvent};

pub use frontend::{Frontend, Notice, NoticeLevel, TerminalFrontend};
pub use scripted::ScriptedFrontend;

/// Result of a TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppResult<T> {
    /// Application completed with a value
    Done(T),
    /// Application was cancelled by user
    Cancelled,
}

/// Trait for TUI applications.
///
/// Implement this trait to create interactive TUI screens.
pub trait TuiApp {
    /// The output type when the application completes.
    type Output;

    /// Handle an event and optionally return a result.
    ///
    /// Return `Some(AppResult)` to exit the application,
    /// or `None` to continue running.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>>;

    /// Render the application into `area` of the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Run a TUI application to completion on `terminal`.
///
/// Renders, blocks for one event, applies it, and repeats. `next_event`
/// returning `None` means the input source is closed, which ends the session
/// as a cancellation. `notices` are shown in a strip above the application;
/// `on_frame` observes every completed frame.
pub fn drive<B, A, E, F>(
    terminal: &mut Terminal<B>,
    mut next_event: E,
    mut app: A,
    notices: &[Notice],
    mut on_frame: F,
) -> Result<AppResult<A::Output>>
where
    B: Backend,
    A: TuiApp,
    E: FnMut() -> Result<Option<TuiEvent>>,
    F: FnMut(&Buffer),
{
    loop {
        let completed = terminal.draw(|frame| {
            let area = frame.area();
            if notices.is_empty() {
                app.render(frame, area);
            } else {
                let [status, main] = status_layout(area, notices.len());
                widgets::render_notices(notices, status, frame.buffer_mut());
                app.render(frame, main);
            }
        })?;
        on_frame(completed.buffer);

        let Some(event) = next_event()? else {
            return Ok(AppResult::Cancelled);
        };
        if let Some(result) = app.handle_event(&event) {
            return Ok(result);
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn status_layout(area: Rect, lines: usize) -> [Rect; 2] {
    let height = lines.min(5) as u16 + 2;
    Layout::vertical([Constraint::Length(height), Constraint::Min(0)]).areas(area)
}
