//! # Constants
//!
//! Centralized constants for magic values used throughout password-organizer.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Menu Labels
// =============================================================================

/// Rule drawn for separator entries.
pub const SEPARATOR_RULE: &str = "---------------";

/// Label of the entry that returns to the previous menu.
pub const BACK_LABEL: &str = "Back...";

/// Label of the entry that quits the program.
pub const QUIT_LABEL: &str = "Exit";

/// Label of the synthetic entry that fetches the next page.
pub const NEXT_PAGE_LABEL: &str = "Next Page";

/// Confirmation dialog answers.
pub const CONFIRM_YES_LABEL: &str = "Yes";
pub const CONFIRM_NO_LABEL: &str = "No";

/// Glyph shown in place of each character of a secret value.
pub const SECRET_MASK_CHAR: char = '•';

/// Printed once when the user leaves the menu.
pub const FAREWELL: &str = "Bye!";

// =============================================================================
// Prompts
// =============================================================================

pub const ROOT_PROMPT: &str = "What do you want to do?";

pub const SECRETS_PROMPT: &str = "Which password do you want to work on?";

// =============================================================================
// Secret Store
// =============================================================================

/// Number of keys fetched per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default file name of the file-backed store (inside `CONFIG_DIR`).
pub const DEFAULT_STORE_FILENAME: &str = "secrets.toml";

// =============================================================================
// File System
// =============================================================================

/// Configuration directory name (inside `~/.config`).
pub const CONFIG_DIR: &str = "password-organizer";

/// Configuration file name (inside `CONFIG_DIR`).
pub const CONFIG_FILENAME: &str = "config";

// =============================================================================
// Shell Completion Paths
// =============================================================================

/// Zsh custom completions directory (relative to home).
pub const ZSH_COMPLETIONS_DIR: &str = ".zfunc";

/// Zsh completion file name.
pub const ZSH_COMPLETION_FILE: &str = "_pwo";

/// Bash completions directory (relative to home).
pub const BASH_COMPLETIONS_DIR: &str = ".local/share/bash-completion/completions";

/// Bash completion file name.
pub const BASH_COMPLETION_FILE: &str = "pwo";

/// Fish completions directory (relative to home).
pub const FISH_COMPLETIONS_DIR: &str = ".config/fish/completions";

/// Fish completion file name.
pub const FISH_COMPLETION_FILE: &str = "pwo.fish";
