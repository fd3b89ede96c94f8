//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`clipboard`] - Write-only system clipboard access
//! - [`output`] - Console output helpers
//! - [`prompts`] - Interactive confirmations
//!
//! # Design
//!
//! The UI module provides the process-boundary capabilities: writing to
//! the console, writing to the clipboard, and asking the operator a
//! question. The clipboard and prompt capabilities are traits so that
//! tests can substitute scripted implementations.

pub mod clipboard;
pub mod output;
pub mod prompts;
