//! # pwo CLI
//!
//! Command-line interface for the password organizer.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs::OpenOptions, path::PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use password_organizer::{
    commands::{self, completions, setup},
    config::{BackendKind, Config},
};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/password-organizer/config   Backend, secrets file, page size, log file

Menu Keys:
  ↑/↓            Move (skips disabled entries, wraps around)
  Type           Search entries starting with the typed text
  Backspace      Undo the last search character
  Enter          Select
  Esc, Ctrl+C/Q  Quit

Getting Started:
  pwo setup                      Create the config and install completions
  pwo                            Open the password menu
  pwo list                       Print every password name

Logging:
  RUST_LOG=debug pwo             Verbose logs (to log_file when configured)";

#[derive(Parser)]
#[command(name = "pwo")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Interactive terminal menu for organizing passwords")]
#[command(
    long_about = "pwo is an interactive terminal menu for organizing passwords kept in a \
secret store. Browse, search and page through password names, then retrieve, update, \
create or delete them.\n\n\
Selection menus support incremental search: typing narrows the list to entries starting \
with the typed text. Long lists are shown one page at a time."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Secrets file to use (implies the file backend)
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Number of password names per page
    #[arg(long, global = true, value_name = "N", value_parser = parse_page_size)]
    page_size: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive password menu (default)
    #[command(
        long_about = "Open the interactive password menu.\n\n\
The main menu lists the available actions. 'List passwords' shows the stored \
password names page by page; picking one offers to retrieve, update or delete it.",
        after_help = "Examples:\n  \
pwo                               Open the menu on the configured store\n  \
pwo --store ./team.toml           Open the menu on another secrets file\n  \
pwo --page-size 25 menu           Show 25 names per page"
    )]
    Menu,

    /// Print every password name
    #[command(
        long_about = "Print every password name, one per line, in listing order.\n\n\
All pages are fetched. Password values are never printed. The memory backend \
keeps nothing between runs, so listing it is rejected.",
        after_help = "Examples:\n  \
pwo list\n  \
pwo list --store ./team.toml"
    )]
    List,

    /// One-time setup: create the config and install shell completions
    #[command(
        long_about = "Create the config file with commented defaults (if missing) and install \
shell completions for your shell.\n\n\
The shell is detected from $SHELL; pass --shell to choose it explicitly."
    )]
    Setup {
        /// Shell to install completions for
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },

    /// Generate shell completions
    #[command(
        after_help = "Examples:\n  \
pwo completions zsh > ~/.zfunc/_pwo\n  \
pwo completions fish > ~/.config/fish/completions/pwo.fish"
    )]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_page_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(err) => Err(err.to_string()),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            return completions::execute(shell, &mut Cli::command());
        }
        Some(Commands::Setup { shell }) => {
            init_logging(None)?;
            return setup::execute(&mut Cli::command(), shell);
        }
        _ => {}
    }

    let mut config = Config::load()?;
    if let Some(path) = cli.store {
        config.backend = BackendKind::File;
        config.store_path = Some(path);
    }
    if let Some(size) = cli.page_size {
        config.page_size = size;
    }
    init_logging(config.log_file.as_ref())?;

    match cli.command {
        Some(Commands::List) => commands::list(&config),
        _ => commands::menu(&config),
    }
}

/// Logs go to `log_file` when set: the menu owns the terminal.
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // Already initialized is fine
    let _ = builder.try_init();
    Ok(())
}
