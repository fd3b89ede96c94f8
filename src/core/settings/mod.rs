//! core::settings
//!
//! Settings loading, healing, and overrides.
//!
//! # Overview
//!
//! Both settings files (global config and per-dictionary metadata) go
//! through the same lifecycle on every run:
//!
//! 1. Load the on-disk document, or start empty if the file is absent.
//! 2. **Heal** it against the schema: every schema key ends up present
//!    with a value of its declared kind, defaults filling in anything
//!    missing, mistyped, or unknown. Hand-edited and stale files are
//!    tolerated rather than rejected.
//! 3. Apply at most one key/value override, coercing the value text to
//!    the key's kind and producing the "Updated settings" report.
//! 4. Write the document back unconditionally, pretty-printed in schema
//!    order, so the file on disk is always normalized.
//!
//! # Example
//!
//! ```no_run
//! use adictools::core::settings::{self, schema, KvOverride};
//! use adictools::ui::prompts::StdinPrompter;
//! use std::path::Path;
//!
//! let mut prompter = StdinPrompter;
//! let outcome = settings::merge_and_apply(
//!     Path::new("adictools_config.json"),
//!     &schema::CONFIG,
//!     Some(&KvOverride {
//!         key: "src".into(),
//!         value: "work-notes".into(),
//!     }),
//!     &mut prompter,
//! )?;
//! if let Some(report) = outcome.report {
//!     println!("{}", report);
//! }
//! # Ok::<(), adictools::core::settings::SettingsError>(())
//! ```

pub mod schema;

pub use schema::{route_override, DictMeta, GlobalConfig, SettingsTarget};

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::core::dict::aligned_lines;
use crate::store::{self, Document, StoreError, WriteOptions};
use crate::ui::prompts::Prompter;

use schema::Schema;

/// Errors from settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An override targeted a key in neither schema.
    #[error("config key not found: {0}")]
    UnknownKey(String),

    /// An override value could not be coerced to a boolean.
    #[error("could not convert '{value}' to bool")]
    InvalidBool { value: String },

    /// An override value could not be coerced to an integer.
    #[error("could not convert '{value}' to int")]
    InvalidInt { value: String },

    /// The schema table and its typed struct disagree.
    #[error("internal settings error: {0}")]
    InternalError(String),

    /// Store operation failed.
    #[error("store error: {0}")]
    StoreError(#[from] StoreError),
}

/// A single key/value override from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvOverride {
    pub key: String,
    pub value: String,
}

/// Result of merging one settings file.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// The effective, schema-conformant document.
    pub doc: Document,
    /// The "Updated settings" report, present when an override applied.
    pub report: Option<String>,
}

/// Load, heal, optionally override, and write back one settings file.
///
/// `override_kv` should be `Some` only when routing assigned the
/// override to this schema; passing a key the schema does not define
/// fails with `SettingsError::UnknownKey`.
///
/// The write-back happens even with no override, so a healed or absent
/// file is normalized on every run.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, if the
/// operator declines a corrupt-file reset, or if the override key or
/// value is invalid. On error nothing further is written.
pub fn merge_and_apply(
    path: &Path,
    schema: &Schema,
    override_kv: Option<&KvOverride>,
    prompter: &mut dyn Prompter,
) -> Result<MergeOutcome, SettingsError> {
    let on_disk = if path.exists() {
        store::load_document(path, prompter)?
    } else {
        Document::new()
    };

    let mut doc = heal(schema, &on_disk);

    let report = match override_kv {
        Some(kv) => Some(apply_override(schema, &mut doc, kv)?),
        None => None,
    };

    store::save_document(path, &doc, WriteOptions::settings())?;

    Ok(MergeOutcome { doc, report })
}

/// Rebuild a document so it conforms to the schema.
///
/// The result has exactly the schema's keys in schema order. A key
/// whose on-disk value has the declared kind is kept; anything missing
/// or mistyped is reset to the default, and unknown keys are dropped.
/// Total over arbitrary documents, and idempotent.
pub fn heal(schema: &Schema, on_disk: &Document) -> Document {
    schema
        .entries
        .iter()
        .map(|entry| {
            let value = match on_disk.get(entry.key) {
                Some(v) if entry.default.kind().matches(v) => v.clone(),
                _ => entry.default.to_value(),
            };
            (entry.key.to_string(), value)
        })
        .collect()
}

/// Coerce and insert one override, returning the settings report.
fn apply_override(
    schema: &Schema,
    doc: &mut Document,
    kv: &KvOverride,
) -> Result<String, SettingsError> {
    let entry = schema
        .entry(&kv.key)
        .ok_or_else(|| SettingsError::UnknownKey(kv.key.clone()))?;
    let value = entry.default.kind().coerce(&kv.value)?;
    doc.insert(kv.key.clone(), value);
    Ok(settings_report(doc))
}

/// Render the full document as the "Updated settings" report.
///
/// Keys are sorted; values render in their JSON form except strings,
/// which render bare.
fn settings_report(doc: &Document) -> String {
    let mut rows: Vec<(String, String)> = doc
        .iter()
        .map(|(k, v)| (k.clone(), render_value(v)))
        .collect();
    rows.sort();
    format!("Updated settings: \n{}", aligned_lines(&rows).join("\n"))
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
