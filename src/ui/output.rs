//! ui::output
//!
//! Console output helpers.
//!
//! # Design
//!
//! These helpers only format. Whether something should be shown at all
//! (output gating, warning policy) is decided by the caller, so every
//! function here prints unconditionally. Warnings go to stdout like
//! ordinary output; only fatal errors use stderr.

use std::fmt::Display;

/// Print a message to stdout.
pub fn print(message: impl Display) {
    println!("{}", message);
}

/// Print a warning to stdout with the standard prefix.
pub fn warn(message: impl Display) {
    println!("[Warning] {}", message);
}

/// Print an error message to stderr.
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}
