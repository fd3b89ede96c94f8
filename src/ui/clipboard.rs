//! ui::clipboard
//!
//! Write-only clipboard access.
//!
//! # Design
//!
//! Copying goes through platform helper commands (`pbcopy`, `xclip` or
//! `xsel`, `clip`) rather than an in-process clipboard library: the
//! helper hands the selection to the display server, so it survives
//! this short-lived process exiting. The [`ClipSink`] trait lets tests
//! substitute a recording sink.

use std::io::Write;
use std::process::{Child, Command, Stdio};

use thiserror::Error;

/// Errors from clipboard operations.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to copy to clipboard: {0}")]
    CopyFailed(String),
}

/// A destination for copied text.
pub trait ClipSink {
    /// Copy the given text, replacing the previous clipboard contents.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The real system clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        copy_to_system_clipboard(text)
    }
}

#[cfg(target_os = "macos")]
fn copy_to_system_clipboard(text: &str) -> Result<(), ClipboardError> {
    let child = spawn_helper("pbcopy", &[])?;
    feed(child, text)
}

#[cfg(target_os = "linux")]
fn copy_to_system_clipboard(text: &str) -> Result<(), ClipboardError> {
    // Try xclip first, then xsel as fallback
    let child = match spawn_helper("xclip", &["-selection", "clipboard"]) {
        Ok(child) => child,
        Err(_) => spawn_helper("xsel", &["--clipboard", "--input"]).map_err(|_| {
            ClipboardError::CopyFailed("no clipboard helper found (tried xclip and xsel)".into())
        })?,
    };
    feed(child, text)
}

#[cfg(target_os = "windows")]
fn copy_to_system_clipboard(text: &str) -> Result<(), ClipboardError> {
    let child = spawn_helper("clip", &[])?;
    feed(child, text)
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn copy_to_system_clipboard(_text: &str) -> Result<(), ClipboardError> {
    Err(ClipboardError::CopyFailed(
        "clipboard not supported on this platform".into(),
    ))
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn spawn_helper(helper: &str, args: &[&str]) -> Result<Child, ClipboardError> {
    Command::new(helper)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| ClipboardError::CopyFailed(format!("failed to spawn {helper}: {e}")))
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn feed(mut child: Child, text: &str) -> Result<(), ClipboardError> {
    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            ClipboardError::CopyFailed(format!("failed to write to clipboard helper: {e}"))
        })?;
    }

    // Child::wait closes stdin first, so the helper sees EOF
    let status = child.wait().map_err(|e| {
        ClipboardError::CopyFailed(format!("failed to wait for clipboard helper: {e}"))
    })?;
    if !status.success() {
        return Err(ClipboardError::CopyFailed(format!(
            "clipboard helper exited with {status}"
        )));
    }
    Ok(())
}
