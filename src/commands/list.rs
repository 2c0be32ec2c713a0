//! # List Command
//!
//! Prints every password key, one per line, following all pages.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::{
    config::{BackendKind, Config},
    store::SecretStore,
};

use super::open_file_store;

/// Executes the list command.
pub fn execute(config: &Config) -> Result<()> {
    if config.backend == BackendKind::Memory {
        anyhow::bail!(
            "The memory backend starts empty on every run, so there is nothing to list. \
             Set backend = \"file\" or pass --store <PATH>."
        );
    }
    let keys = all_keys(&open_file_store(config)?)?;

    if keys.is_empty() {
        println!("No passwords stored.");
        return Ok(());
    }

    for key in keys {
        println!("{key}");
    }
    Ok(())
}

/// Every key in the store, in listing order.
pub fn all_keys(store: &impl SecretStore) -> Result<Vec<String>> {
    let page = store.list_keys().context("Failed to list passwords")?;
    page.collect_all().context("Failed to list passwords")
}
