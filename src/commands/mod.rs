//! # Commands
//!
//! CLI command implementations for pwo.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod completions;
pub mod list;
pub mod menu;
pub mod setup;

use anyhow::{Context, Result};

use crate::{config::Config, store::FileStore};

pub use self::{list::execute as list, menu::execute as menu};

/// Opens the file store configured in `config`.
fn open_file_store(config: &Config) -> Result<FileStore> {
    let path = config
        .store_path()
        .context("Could not determine home directory")?;
    FileStore::open(&path, config.page_size)
        .with_context(|| format!("Failed to open secrets file: {}", path.display()))
}
