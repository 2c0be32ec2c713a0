//! TUI screens for interactive workflows.
//!
//! The helpers here run one screen on a [`Frontend`] and turn a cancelled
//! session into [`Error::Cancelled`].

mod confirm;
mod prompt;
mod select;

use std::fmt::Debug;

use crate::{
    error::{Error, Result},
    menu::SelectionEngine,
    tui::{AppResult, Frontend, TuiApp},
};

pub use confirm::ConfirmDialog;
pub use prompt::PromptScreen;
pub use select::SelectScreen;

fn answered<A: TuiApp>(frontend: &mut impl Frontend, app: A) -> Result<A::Output> {
    match frontend.run(app)? {
        AppResult::Done(value) => Ok(value),
        AppResult::Cancelled => Err(Error::Cancelled),
    }
}

/// Run a selection session and return the confirmed value.
pub fn select<T: Clone + PartialEq + Debug>(
    frontend: &mut impl Frontend,
    prompt: &str,
    header: Option<&str>,
    engine: SelectionEngine<T>,
) -> Result<T> {
    let mut screen = SelectScreen::new(prompt, engine);
    if let Some(header) = header {
        screen = screen.with_header(header);
    }
    answered(frontend, screen)
}

/// Ask a yes/no question.
pub fn confirm(frontend: &mut impl Frontend, message: &str, default: bool) -> Result<bool> {
    answered(frontend, ConfirmDialog::new(message, default)?)
}

/// Prompt for a line of text.
pub fn prompt_text(frontend: &mut impl Frontend, prompt: &str, label: &str) -> Result<String> {
    answered(frontend, PromptScreen::new(prompt, label))
}

/// Prompt for a secret value without echoing it.
pub fn prompt_secret(frontend: &mut impl Frontend, prompt: &str, label: &str) -> Result<String> {
    answered(frontend, PromptScreen::new(prompt, label).masked())
}
