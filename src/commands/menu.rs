//! # Menu Command
//!
//! Runs the interactive password menu on the configured store.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use log::info;

use crate::{
    config::{BackendKind, Config},
    error::Error,
    menu::MenuNavigator,
    store::{MemoryStore, SecretStore},
    tui::TerminalFrontend,
    ui,
};

use super::open_file_store;

/// Executes the menu command.
pub fn execute(config: &Config) -> Result<()> {
    if !io::stdout().is_terminal() {
        anyhow::bail!("The menu needs an interactive terminal. Use `pwo list` to print keys.");
    }

    match config.backend {
        BackendKind::File => interact(open_file_store(config)?),
        BackendKind::Memory => interact(MemoryStore::new(config.page_size)),
    }
}

fn interact<S: SecretStore>(store: S) -> Result<()> {
    let frontend = TerminalFrontend::new().context("Failed to initialize terminal")?;
    let mut navigator = MenuNavigator::new(store, frontend);
    let result = navigator.run();

    // Restore the terminal before printing anything
    drop(navigator);
    finish(result)
}

/// Maps the end of a menu run onto the command result.
///
/// Quitting is a normal exit: the farewell is printed once and the command
/// succeeds.
pub fn finish(result: crate::error::Result<()>) -> Result<()> {
    match result {
        Ok(()) | Err(Error::Cancelled) => {
            info!("menu closed by user");
            ui::print_farewell();
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn test_cancellation_is_success() {
        assert!(finish(Err(Error::Cancelled)).is_ok());
        assert!(finish(Ok(())).is_ok());
    }

    #[test]
    fn test_other_errors_fail() {
        let err = Error::Store(StoreError::Backend("disk full".to_string()));
        assert!(finish(Err(err)).is_err());
    }
}
