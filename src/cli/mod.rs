//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line flags
//! - Resolve the storage root directory
//! - Hand one engine request to [`crate::engine::run`]
//!
//! The CLI layer is thin. Every settings and dictionary mutation flows
//! through the engine; the only work done here is wiring the real
//! stdin prompter and system clipboard into it.

pub mod args;

pub use args::{Cli, Shell};

use anyhow::{bail, Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::core::paths::ToolPaths;
use crate::engine;
use crate::ui::clipboard::SystemClipboard;
use crate::ui::prompts::StdinPrompter;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    if let Some(shell) = cli.completions {
        print_completions(shell);
        return Ok(());
    }

    let root = match &cli.cwd {
        Some(dir) => {
            if !dir.is_dir() {
                bail!("Directory '{}' does not exist", dir.display());
            }
            dir.clone()
        }
        None => std::env::current_dir().context("Failed to resolve working directory")?,
    };

    let paths = ToolPaths::new(root);
    let mut prompter = StdinPrompter;
    let mut clip = SystemClipboard;

    engine::run(&cli.to_request(), &paths, &mut prompter, &mut clip)?;
    Ok(())
}

/// Write a completion script for the given shell to stdout.
fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, &name, &mut std::io::stdout()),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, &name, &mut std::io::stdout()),
        Shell::Fish => generate(shells::Fish, &mut cmd, &name, &mut std::io::stdout()),
        Shell::PowerShell => {
            generate(shells::PowerShell, &mut cmd, &name, &mut std::io::stdout())
        }
    }
}
