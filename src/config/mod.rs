//! # Configuration
//!
//! User configuration stored at `~/.config/password-organizer/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_DIR, CONFIG_FILENAME, DEFAULT_PAGE_SIZE, DEFAULT_STORE_FILENAME};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn home_dir() -> Option<PathBuf> {
    HOME_OVERRIDE
        .with(|cell| cell.borrow().clone())
        .or_else(dirs::home_dir)
}

/// Which secret store the menu works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// TOML file on disk
    #[default]
    File,
    /// In-process store, discarded on exit
    Memory,
}

/// Configuration stored at ~/.config/password-organizer/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendKind,

    /// Secrets file for the file backend
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Number of keys listed per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Log destination; stderr when unset
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            store_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            log_file: None,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Config {
    /// Returns the path to the config directory (~/.config/password-organizer)
    pub fn dir() -> Option<PathBuf> {
        // $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        home_dir().map(|home| home.join(".config").join(CONFIG_DIR))
    }

    /// Returns the path to the config file
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    /// Loads the config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Loads the config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        if config.page_size == 0 {
            anyhow::bail!("page_size must be at least 1 ({})", path.display());
        }
        Ok(config)
    }

    /// Effective secrets file: `store_path`, or secrets.toml next to the config.
    pub fn store_path(&self) -> Option<PathBuf> {
        self.store_path
            .clone()
            .or_else(|| Self::dir().map(|dir| dir.join(DEFAULT_STORE_FILENAME)))
    }

    /// Creates the config with default values and comments.
    /// Used by `pwo setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::save_with_comments(&path, &Self::default())?;
        Ok(true)
    }

    fn save_with_comments(path: &Path, config: &Self) -> Result<()> {
        let backend = match config.backend {
            BackendKind::File => "file",
            BackendKind::Memory => "memory",
        };
        let store_path_line = config.store_path.as_ref().map_or_else(
            || format!("# store_path = \"~/.config/{CONFIG_DIR}/{DEFAULT_STORE_FILENAME}\""),
            |p| format!("store_path = \"{}\"", p.display()),
        );
        let log_file_line = config.log_file.as_ref().map_or_else(
            || "# log_file = \"/tmp/pwo.log\"".to_string(),
            |p| format!("log_file = \"{}\"", p.display()),
        );

        let content = format!(
            r#"# password-organizer Configuration
# Location: ~/.config/{CONFIG_DIR}/{CONFIG_FILENAME}

# Secret store backend: "file" or "memory".
# The memory backend starts empty and is discarded on exit.
# Default: "file"
backend = "{backend}"

# Secrets file used by the file backend.
# Default: ~/.config/{CONFIG_DIR}/{DEFAULT_STORE_FILENAME}
{store_path_line}

# Number of password keys listed per page.
# Default: {DEFAULT_PAGE_SIZE}
page_size = {page_size}

# Write logs to this file instead of stderr (level set with RUST_LOG).
{log_file_line}
"#,
            page_size = config.page_size,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}
