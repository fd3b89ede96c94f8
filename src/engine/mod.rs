//! engine
//!
//! # Overview
//!
//! The engine runs one full invocation: merge and persist both settings
//! files, load the selected dictionary, apply the requested operations,
//! route outputs to the enabled sinks, and write the dictionary back.
//!
//! # Architecture
//!
//! A [`Request`] is the parsed intent of one invocation; the CLI builds
//! it and hands it to [`run`]. Every run walks the same pipeline:
//!
//! ```text
//! route override -> merge config -> merge meta -> load dictionary
//!     -> apply operations -> report events -> save dictionary
//! ```
//!
//! Settings files are merged and rewritten on every run, so both exist
//! and carry the full schema afterwards even when nothing else was
//! asked for. The dictionary write at the end is unconditional too; a
//! warning escalated under `treat-warnings-as-errors` is the only thing
//! that stops the pipeline before it.
//!
//! Console prompts and the clipboard sit behind trait objects
//! ([`Prompter`], [`ClipSink`]) so integration tests can script them.

pub mod apply;

use std::path::PathBuf;

use thiserror::Error;

use crate::core::dict::Dictionary;
use crate::core::paths::ToolPaths;
use crate::core::settings::schema::{CONFIG, META};
use crate::core::settings::{
    self, route_override, DictMeta, GlobalConfig, KvOverride, SettingsError, SettingsTarget,
};
use crate::core::types::{DictName, TypeError};
use crate::store::{self, StoreError};
use crate::ui::clipboard::{ClipSink, ClipboardError};
use crate::ui::output;
use crate::ui::prompts::Prompter;

pub use apply::{Event, Warning};

/// One invocation's parsed intent.
///
/// Flag order on the command line does not matter; operations always
/// run in the fixed order documented in [`apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Key/value override for one settings file.
    pub config: Option<KvOverride>,
    /// Add (or overwrite) one entry.
    pub add: Option<AddRequest>,
    /// List all entries.
    pub list: bool,
    /// Get one value by key.
    pub get: Option<String>,
    /// Delete one entry by key.
    pub delete: Option<String>,
}

/// An add operation: a key plus the value tokens to space-join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    pub key: String,
    pub values: Vec<String>,
}

impl AddRequest {
    /// Build from raw tokens: the first is the key, the rest are value
    /// tokens. No tokens means no add at all.
    pub fn from_tokens(tokens: &[String]) -> Option<Self> {
        let (key, values) = tokens.split_first()?;
        Some(Self {
            key: key.clone(),
            values: values.to_vec(),
        })
    }
}

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum RunError {
    /// A settings merge or override failed.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// A persistent file could not be loaded or saved.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The configured dictionary name cannot name a file.
    #[error("selected dictionary error: {0}")]
    Name(#[from] TypeError),

    /// A warning escalated under `treat-warnings-as-errors`.
    #[error("{0}")]
    EscalatedWarning(Warning),

    /// Copying an output to the system clipboard failed.
    #[error("clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// The dictionaries directory could not be created.
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Run one full invocation against the tool root in `paths`.
pub fn run(
    request: &Request,
    paths: &ToolPaths,
    prompter: &mut dyn Prompter,
    clip: &mut dyn ClipSink,
) -> Result<(), RunError> {
    // Route the override up front so an unknown key fails before any
    // file is touched.
    let (config_kv, meta_kv) = match &request.config {
        Some(kv) => match route_override(&kv.key)? {
            SettingsTarget::Config => (Some(kv), None),
            SettingsTarget::Meta => (None, Some(kv)),
        },
        None => (None, None),
    };

    let config_outcome =
        settings::merge_and_apply(&paths.config_file(), &CONFIG, config_kv, prompter)?;
    if let Some(report) = &config_outcome.report {
        output::print(report);
    }
    let config = GlobalConfig::from_document(&config_outcome.doc)?;

    let name = DictName::new(config.src.clone())?;

    paths.ensure_dirs().map_err(|source| RunError::CreateDir {
        path: paths.dictionaries_dir(),
        source,
    })?;

    let meta_outcome =
        settings::merge_and_apply(&paths.meta_file(&name), &META, meta_kv, prompter)?;
    if let Some(report) = &meta_outcome.report {
        output::print(report);
    }
    let meta = DictMeta::from_document(&meta_outcome.doc)?;

    let dict_path = paths.dict_file(&name);
    let mut dict = if dict_path.is_file() {
        Dictionary::from_map(store::load_string_map(&dict_path, prompter)?)
    } else {
        Dictionary::new()
    };

    if config.print_enabled() {
        output::print(format!("Selected dictionary: \"{}\"", config.src));
    }

    for event in apply::apply(&mut dict, &meta, &config, request) {
        match event {
            Event::Output(text) => {
                if config.print_enabled() {
                    output::print(&text);
                }
                if config.clip_enabled() {
                    clip.copy(&text)?;
                }
            }
            Event::Warning(warning) => report_warning(warning, &config)?,
        }
    }

    store::save_string_map(&dict_path, dict.as_map(), meta.write_options())?;

    Ok(())
}

/// Report or escalate one warning per the configured policy.
fn report_warning(warning: Warning, config: &GlobalConfig) -> Result<(), RunError> {
    if config.treat_warnings_as_errors {
        return Err(RunError::EscalatedWarning(warning));
    }
    if config.log_warnings {
        output::warn(&warning);
    }
    Ok(())
}
