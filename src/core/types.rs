//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`DictName`] - Validated dictionary name
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs. A
//! dictionary name is embedded verbatim in file paths, so anything
//! that could escape the dictionaries directory is rejected here.
//!
//! # Examples
//!
//! ```
//! use adictools::core::types::DictName;
//!
//! // Valid constructions
//! let name = DictName::new("my_dict").unwrap();
//! assert_eq!(name.as_str(), "my_dict");
//!
//! // Invalid constructions fail at creation time
//! assert!(DictName::new("../escape").is_err());
//! assert!(DictName::new("").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid dictionary name: {0}")]
    InvalidDictName(String),
}

/// A validated dictionary name.
///
/// Dictionary names become file stems under the dictionaries directory,
/// so they must be safe to embed in a path:
/// - Cannot be empty
/// - Cannot start with `.`
/// - Cannot contain `/` or `\`
/// - Cannot contain `..`
/// - Cannot contain ASCII control characters
///
/// # Example
///
/// ```
/// use adictools::core::types::DictName;
///
/// // Valid dictionary names
/// let name = DictName::new("work-notes").unwrap();
/// assert_eq!(name.as_str(), "work-notes");
///
/// let spaced = DictName::new("shopping list").unwrap();
/// assert_eq!(spaced.as_str(), "shopping list");
///
/// // Invalid dictionary names
/// assert!(DictName::new("").is_err());
/// assert!(DictName::new(".hidden").is_err());
/// assert!(DictName::new("a/b").is_err());
/// assert!(DictName::new("up..dir").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DictName(String);

impl DictName {
    /// Create a new validated dictionary name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidDictName` if the name could not be
    /// safely embedded in a file path.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Validate a dictionary name against path-safety rules.
    fn validate(name: &str) -> Result<(), TypeError> {
        // Cannot be empty
        if name.is_empty() {
            return Err(TypeError::InvalidDictName(
                "dictionary name cannot be empty".into(),
            ));
        }

        // Cannot start with '.'
        if name.starts_with('.') {
            return Err(TypeError::InvalidDictName(
                "dictionary name cannot start with '.'".into(),
            ));
        }

        // Cannot contain path separators
        if name.contains('/') || name.contains('\\') {
            return Err(TypeError::InvalidDictName(
                "dictionary name cannot contain path separators".into(),
            ));
        }

        // Cannot contain ".."
        if name.contains("..") {
            return Err(TypeError::InvalidDictName(
                "dictionary name cannot contain '..'".into(),
            ));
        }

        // Cannot contain ASCII control characters (0x00-0x1F or 0x7F)
        for c in name.chars() {
            if c.is_ascii_control() {
                return Err(TypeError::InvalidDictName(
                    "dictionary name cannot contain control characters".into(),
                ));
            }
        }

        Ok(())
    }

    /// Get the dictionary name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DictName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<DictName> for String {
    fn from(name: DictName) -> Self {
        name.0
    }
}

impl AsRef<str> for DictName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DictName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
