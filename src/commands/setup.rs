//! # Setup Command
//!
//! One-time setup for pwo: creates the config file and installs shell completions.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    env, fs,
    io::{self, IsTerminal},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Command;
use clap_complete::Shell;
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    constants::{
        BASH_COMPLETIONS_DIR, BASH_COMPLETION_FILE, FISH_COMPLETIONS_DIR, FISH_COMPLETION_FILE,
        ZSH_COMPLETIONS_DIR, ZSH_COMPLETION_FILE,
    },
    menu::{normalize, ChoiceRecord, SelectionEngine},
    tui::{screens, TerminalFrontend},
    ui,
};

use super::completions::generate_to_string;

/// Executes the setup command.
///
/// The `cmd` parameter should be a clone of the CLI command for generating completions.
/// The `shell_override` parameter allows explicit shell specification, bypassing detection.
pub fn execute(cmd: &mut Command, shell_override: Option<Shell>) -> Result<()> {
    eprintln!("{}\n", "Setting up pwo...".bold());

    setup_config()?;
    setup_completions(cmd, shell_override)?;

    eprintln!("\n{} Setup complete!", "✓".green().bold());
    Ok(())
}

/// Creates the config file if it doesn't exist
fn setup_config() -> Result<()> {
    let path = Config::path().context("Could not determine home directory")?;

    if Config::create_default_if_missing()? {
        ui::print_success("Created config", &path);
    } else {
        ui::print_success("Config already exists", &path);
    }
    Ok(())
}

/// Shell named by `$SHELL`, if recognized.
fn detect_shell() -> Option<Shell> {
    let shell_path = env::var("SHELL").ok()?;
    let name = shell_path.rsplit('/').next().unwrap_or(&shell_path);
    // Handle login shell prefix (e.g., "-zsh")
    let name = name.strip_prefix('-').unwrap_or(name);

    match name {
        "zsh" => Some(Shell::Zsh),
        "bash" => Some(Shell::Bash),
        "fish" => Some(Shell::Fish),
        "elvish" => Some(Shell::Elvish),
        "powershell" | "pwsh" => Some(Shell::PowerShell),
        _ => None,
    }
}

/// Prompts the user to select their shell interactively.
fn prompt_shell_selection() -> Result<Shell> {
    if !io::stdout().is_terminal() {
        anyhow::bail!("Could not detect your shell. Pass it explicitly: pwo setup --shell <SHELL>");
    }

    let choices = normalize([
        ChoiceRecord::new("zsh", Shell::Zsh),
        ChoiceRecord::new("bash", Shell::Bash),
        ChoiceRecord::new("fish", Shell::Fish),
        ChoiceRecord::new("elvish", Shell::Elvish),
        ChoiceRecord::new("powershell", Shell::PowerShell),
    ]);
    let engine = SelectionEngine::new(choices, None)?;

    let mut frontend = TerminalFrontend::new().context("Failed to initialize terminal")?;
    Ok(screens::select(
        &mut frontend,
        "Which shell do you use?",
        None,
        engine,
    )?)
}

/// Returns the completion file path for shells with an auto-load directory
fn get_completion_path(shell: Shell) -> Option<PathBuf> {
    let home = dirs::home_dir()?;

    match shell {
        Shell::Zsh => Some(home.join(ZSH_COMPLETIONS_DIR).join(ZSH_COMPLETION_FILE)),
        Shell::Bash => Some(home.join(BASH_COMPLETIONS_DIR).join(BASH_COMPLETION_FILE)),
        Shell::Fish => Some(home.join(FISH_COMPLETIONS_DIR).join(FISH_COMPLETION_FILE)),
        _ => None,
    }
}

/// Sets up shell completions for the specified or detected shell.
fn setup_completions(cmd: &mut Command, shell_override: Option<Shell>) -> Result<()> {
    let shell = match shell_override.or_else(detect_shell) {
        Some(shell) => shell,
        None => prompt_shell_selection()?,
    };
    let shell_name = format!("{shell:?}").to_lowercase();

    let Some(install_path) = get_completion_path(shell) else {
        eprintln!("\n  {} Manual setup required for {shell_name}", "→".cyan());
        ui::print_hint(&format!(
            "Run: pwo completions {shell_name} > <completions-file>"
        ));
        return Ok(());
    };

    let completions = generate_to_string(shell, cmd);
    if let Some(parent) = install_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&install_path, completions)
        .with_context(|| format!("Failed to write completions: {}", install_path.display()))?;

    ui::print_success(&format!("Installed {shell_name} completions"), &install_path);

    match shell {
        Shell::Zsh => ui::print_hint(
            "Add to ~/.zshrc: fpath=(~/.zfunc $fpath) && autoload -Uz compinit && compinit",
        ),
        Shell::Bash => ui::print_hint(&format!(
            "If not auto-loaded, add to ~/.bashrc: source {}",
            install_path.display()
        )),
        _ => ui::print_hint("Completions will be loaded automatically on next shell start."),
    }
    Ok(())
}
