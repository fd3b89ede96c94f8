//! ui::prompts
//!
//! Interactive confirmations.
//!
//! # Design
//!
//! The only interactive moment in the tool is the corrupt-file reset
//! confirmation, and it is modeled as a capability ([`Prompter`]) so
//! callers can inject a scripted answer in tests. The binary wires in
//! [`StdinPrompter`]; everything below the CLI takes `&mut dyn Prompter`.

use std::io::{self, BufRead, Write};
use std::path::Path;

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// Capability for confirming a destructive store reset.
pub trait Prompter {
    /// Ask whether a corrupt store file should be reset to empty.
    ///
    /// Returns `Ok(true)` only on an explicit confirmation; anything
    /// else (including end of input) declines.
    fn confirm_reset(&mut self, path: &Path) -> Result<bool, PromptError>;
}

/// Prompter backed by the process stdin and stdout.
///
/// Accepts exactly `y` (after trimming and lowercasing) as confirmation.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm_reset(&mut self, path: &Path) -> Result<bool, PromptError> {
        print!(
            "[ERROR] The file \"{}\" is corrupt. Would you like to reset it? (y/n): ",
            path.display()
        );
        io::stdout()
            .flush()
            .map_err(|e| PromptError::IoError(e.to_string()))?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|e| PromptError::IoError(e.to_string()))?;

        Ok(answer.trim().to_lowercase() == "y")
    }
}
