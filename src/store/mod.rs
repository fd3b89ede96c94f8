//! store
//!
//! JSON document persistence.
//!
//! # Overview
//!
//! Every file this tool owns is a flat JSON object. The store reads two
//! shapes of it:
//! - **documents**: option name to JSON value (settings files)
//! - **string maps**: string key to string value (dictionary files)
//!
//! Both preserve on-disk key order in memory, so "insertion order" on a
//! write round-trips.
//!
//! # Corruption recovery
//!
//! A file that fails to parse, or whose shape is wrong, is not silently
//! discarded: the injected [`Prompter`] asks the operator whether to
//! reset it. A confirmed reset yields an empty document (the file itself
//! is rewritten by the run's final write-back); a declined reset aborts
//! with [`StoreError::Malformed`].
//!
//! # Atomicity
//!
//! Writes go to a temp file in the same directory, are fsync'd, then
//! renamed over the target, so a crash never leaves a half-written file.
//!
//! # Example
//!
//! ```no_run
//! use adictools::store::{self, WriteOptions};
//! use adictools::ui::prompts::StdinPrompter;
//! use std::path::Path;
//!
//! let mut prompter = StdinPrompter;
//! let map = store::load_string_map(Path::new("dictionaries/my_dict.json"), &mut prompter)?;
//! store::save_string_map(
//!     Path::new("dictionaries/my_dict.json"),
//!     &map,
//!     WriteOptions { sort_keys: true, pretty: true },
//! )?;
//! # Ok::<(), adictools::store::StoreError>(())
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

use crate::ui::prompts::{PromptError, Prompter};

/// A raw settings document: option name to JSON value, in file order.
pub type Document = IndexMap<String, Value>;

/// A dictionary document: string keys to string values, in file order.
pub type StringMap = IndexMap<String, String>;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read a store file from disk.
    #[error("failed to read store file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A store file could not be parsed and the operator declined a reset.
    #[error("store file '{path}' is malformed: {message}")]
    Malformed { path: PathBuf, message: String },

    /// Failed to write a store file to disk.
    #[error("failed to write store file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize a document.
    #[error("failed to serialize store file '{path}': {message}")]
    SerializeError { path: PathBuf, message: String },

    /// The corruption-recovery prompt itself failed.
    #[error("prompt error: {0}")]
    PromptError(#[from] PromptError),
}

/// Controls how a document is rendered on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Emit keys in sorted order instead of map order.
    pub sort_keys: bool,
    /// Emit 4-space-indented multi-line JSON instead of the compact form.
    pub pretty: bool,
}

impl WriteOptions {
    /// Options for settings files: map order, always pretty.
    pub fn settings() -> Self {
        Self {
            sort_keys: false,
            pretty: true,
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Load a settings document from a file.
///
/// The file must contain a JSON object; values may be any JSON type.
/// Missing files are the caller's concern (check existence first and
/// substitute defaults).
///
/// # Errors
///
/// Returns `StoreError::ReadError` if the file cannot be read, and
/// `StoreError::Malformed` if it fails to parse and the operator
/// declines to reset it.
pub fn load_document(path: &Path, prompter: &mut dyn Prompter) -> Result<Document, StoreError> {
    let contents = read_contents(path)?;
    match serde_json::from_str::<Document>(&contents) {
        Ok(doc) => Ok(doc),
        Err(e) => {
            confirm_reset(path, e.to_string(), prompter)?;
            Ok(Document::new())
        }
    }
}

/// Load a dictionary from a file.
///
/// The file must contain a JSON object whose values are all strings;
/// any other shape takes the same reset-or-abort path as a parse
/// failure. Missing files are the caller's concern.
///
/// # Errors
///
/// Same as [`load_document`].
pub fn load_string_map(path: &Path, prompter: &mut dyn Prompter) -> Result<StringMap, StoreError> {
    let contents = read_contents(path)?;
    match serde_json::from_str::<StringMap>(&contents) {
        Ok(map) => Ok(map),
        Err(e) => {
            confirm_reset(path, e.to_string(), prompter)?;
            Ok(StringMap::new())
        }
    }
}

fn read_contents(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|e| StoreError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Ask the operator to approve a reset; error out if they decline.
fn confirm_reset(
    path: &Path,
    message: String,
    prompter: &mut dyn Prompter,
) -> Result<(), StoreError> {
    if prompter.confirm_reset(path)? {
        Ok(())
    } else {
        Err(StoreError::Malformed {
            path: path.to_path_buf(),
            message,
        })
    }
}

// =============================================================================
// Saving
// =============================================================================

/// Save a settings document, replacing the file atomically.
///
/// # Errors
///
/// Returns `StoreError::WriteError` if any filesystem step fails.
pub fn save_document(
    path: &Path,
    doc: &Document,
    options: WriteOptions,
) -> Result<(), StoreError> {
    if options.sort_keys {
        let mut sorted = doc.clone();
        sorted.sort_keys();
        write_json(path, &sorted, options.pretty)
    } else {
        write_json(path, doc, options.pretty)
    }
}

/// Save a dictionary, replacing the file atomically.
///
/// # Errors
///
/// Returns `StoreError::WriteError` if any filesystem step fails.
pub fn save_string_map(
    path: &Path,
    map: &StringMap,
    options: WriteOptions,
) -> Result<(), StoreError> {
    if options.sort_keys {
        let mut sorted = map.clone();
        sorted.sort_keys();
        write_json(path, &sorted, options.pretty)
    } else {
        write_json(path, map, options.pretty)
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T, pretty: bool) -> Result<(), StoreError> {
    let contents = render(value, pretty).map_err(|e| StoreError::SerializeError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    write_atomic(path, &contents)
}

fn render<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<Vec<u8>> {
    if pretty {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        Ok(buf)
    } else {
        serde_json::to_vec(value)
    }
}

/// Write file contents atomically (temp file, fsync, rename).
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let write_error = |e: std::io::Error, p: &Path| StoreError::WriteError {
        path: p.to_path_buf(),
        source: e,
    };

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_error(e, path))?;
    }

    // Write to temp file in same directory (for atomic rename)
    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path).map_err(|e| write_error(e, &temp_path))?;
    file.write_all(contents)
        .map_err(|e| write_error(e, &temp_path))?;
    file.sync_all().map_err(|e| write_error(e, &temp_path))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| write_error(e, path))?;

    Ok(())
}
