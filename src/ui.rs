//! # UI Utilities
//!
//! Plain terminal output used outside the interactive screens.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use owo_colors::OwoColorize;

use crate::constants::FAREWELL;

/// Prints the goodbye line shown when the user leaves the menu.
pub fn print_farewell() {
    println!("{}", FAREWELL.cyan());
}

/// Prints a success message naming a file.
///
/// Format: `✓ {message}: {path}`
pub fn print_success(message: &str, path: &Path) {
    eprintln!("{} {}: {}", "✓".green(), message, path.display());
}

/// Prints a follow-up hint.
pub fn print_hint(hint: &str) {
    eprintln!("  {} {}", "→".cyan(), hint);
}
