//! Frontends run one interactive session at a time and relay notices.

use log::{info, warn};

use crate::{
    error::Result,
    tui::{drive, event::EventHandler, terminal::TerminalGuard, AppResult, TuiApp},
};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A one-off message shown to the user between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Drives interactive sessions.
///
/// Sessions are strictly sequential: `run` blocks until the application
/// answers or is cancelled.
pub trait Frontend {
    /// Run an application to completion.
    fn run<A: TuiApp>(&mut self, app: A) -> Result<AppResult<A::Output>>;

    /// Queue a message for the user.
    fn notify(&mut self, notice: Notice);
}

/// Frontend backed by the real terminal.
///
/// Holds the terminal for its whole lifetime. Queued notices are shown above
/// the next screen and then dropped.
pub struct TerminalFrontend {
    guard: TerminalGuard,
    events: EventHandler,
    pending: Vec<Notice>,
}

impl TerminalFrontend {
    pub fn new() -> Result<Self> {
        Ok(Self {
            guard: TerminalGuard::new()?,
            events: EventHandler,
            pending: Vec::new(),
        })
    }
}

impl Frontend for TerminalFrontend {
    fn run<A: TuiApp>(&mut self, app: A) -> Result<AppResult<A::Output>> {
        let notices = std::mem::take(&mut self.pending);
        let events = &self.events;
        drive(
            self.guard.terminal(),
            || Ok(Some(events.next()?)),
            app,
            &notices,
            |_| {},
        )
    }

    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => warn!("{}", notice.message),
            NoticeLevel::Info | NoticeLevel::Success => info!("notice shown ({:?})", notice.level),
        }
        self.pending.push(notice);
    }
}
