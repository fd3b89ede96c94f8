//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! All operations are flags on a single command; there are no
//! subcommands. Flag order on the command line does not affect
//! processing order, and a flag given twice keeps only its last
//! occurrence (`overrides_with` on each flag, pointing at itself).

use clap::Parser;
use std::path::PathBuf;

use crate::core::settings::KvOverride;
use crate::engine::{AddRequest, Request};

/// A command-line dictionary: store key-value pairs, then print or
/// copy them back.
#[derive(Parser, Debug)]
#[command(name = "adict")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Regardless of flag order, operations always run in this order: \
        Config, Add, List, Get, Delete. Only the last occurrence of a repeated \
        flag is used."
)]
pub struct Cli {
    /// Add an entry: a key followed by value words (joined with spaces)
    #[arg(
        short,
        long,
        num_args = 0..,
        value_names = ["KEY", "VALUE"],
        overrides_with = "add"
    )]
    pub add: Option<Vec<String>>,

    /// Set an option in the configuration or selected dictionary's metadata
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["KEY", "VALUE"],
        overrides_with = "config"
    )]
    pub config: Option<Vec<String>>,

    /// Delete the entry stored under KEY
    #[arg(short, long, value_name = "KEY", overrides_with = "delete")]
    pub delete: Option<String>,

    /// Output the value stored under KEY
    #[arg(short, long, value_name = "KEY", overrides_with = "get")]
    pub get: Option<String>,

    /// Output every entry in the selected dictionary
    #[arg(short, long, overrides_with = "list")]
    pub list: bool,

    /// Run as if adict was started in this directory
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Generate a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Convert the parsed flags into an engine request.
    pub fn to_request(&self) -> Request {
        Request {
            config: self.config.as_deref().and_then(|pair| match pair {
                [key, value] => Some(KvOverride {
                    key: key.clone(),
                    value: value.clone(),
                }),
                _ => None,
            }),
            add: self.add.as_deref().and_then(AddRequest::from_tokens),
            list: self.list,
            // An empty KEY is treated as no lookup at all.
            get: self.get.clone().filter(|key| !key.is_empty()),
            delete: self.delete.clone(),
        }
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
