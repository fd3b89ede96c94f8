//! core::paths
//!
//! Centralized path routing for on-disk storage locations.
//!
//! # Storage Layout
//!
//! All data lives under a single root directory (the working directory
//! by default, or whatever `--cwd` points at):
//! - `adictools_config.json` - Global configuration
//! - `dictionaries/` - One pair of files per named dictionary
//!   - `<name>.json` - The dictionary itself
//!   - `<name>.meta.json` - Per-dictionary metadata
//!
//! No code outside this module should compute these joins by hand.
//!
//! # Example
//!
//! ```
//! use adictools::core::paths::ToolPaths;
//! use adictools::core::types::DictName;
//! use std::path::PathBuf;
//!
//! let paths = ToolPaths::new(PathBuf::from("/home/me/notes"));
//! let name = DictName::new("my_dict").unwrap();
//!
//! assert_eq!(
//!     paths.dict_file(&name),
//!     PathBuf::from("/home/me/notes/dictionaries/my_dict.json")
//! );
//! ```

use std::path::{Path, PathBuf};

use crate::core::types::DictName;

const CONFIG_FILE_NAME: &str = "adictools_config.json";
const DICTIONARIES_DIR_NAME: &str = "dictionaries";

/// Centralized path routing for tool storage.
///
/// This struct ensures all storage locations are computed consistently
/// relative to a single root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    /// Root directory all storage hangs off of.
    pub root: PathBuf,
}

impl ToolPaths {
    /// Create a new ToolPaths rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the path to the global configuration file.
    ///
    /// This is `<root>/adictools_config.json`.
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Get the directory holding dictionary and metadata files.
    ///
    /// This is `<root>/dictionaries/`.
    pub fn dictionaries_dir(&self) -> PathBuf {
        self.root.join(DICTIONARIES_DIR_NAME)
    }

    /// Get the path to a named dictionary's data file.
    ///
    /// This is `<root>/dictionaries/<name>.json`.
    pub fn dict_file(&self, name: &DictName) -> PathBuf {
        self.dictionaries_dir().join(format!("{}.json", name))
    }

    /// Get the path to a named dictionary's metadata file.
    ///
    /// This is `<root>/dictionaries/<name>.meta.json`.
    pub fn meta_file(&self, name: &DictName) -> PathBuf {
        self.dictionaries_dir().join(format!("{}.meta.json", name))
    }

    /// Get the root as a Path reference.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensure the dictionaries directory exists.
    ///
    /// # Errors
    ///
    /// Returns an IO error if directory creation fails.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.dictionaries_dir())?;
        Ok(())
    }
}
