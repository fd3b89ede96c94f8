//! core::settings::schema
//!
//! Settings schema tables and typed settings structs.
//!
//! # Schemas
//!
//! Two settings documents exist, each described by a static table:
//! - [`CONFIG`] - the global configuration file
//! - [`META`] - the per-dictionary metadata file
//!
//! Each table row pairs a key with a tagged default ([`SettingDefault`]),
//! so a setting's type is fixed by the table rather than inferred from
//! whatever value happens to be on disk. An override is routed to its
//! document by key membership ([`route_override`]), checked once before
//! any file is touched.
//!
//! # Typed forms
//!
//! After merging, documents are converted into [`GlobalConfig`] and
//! [`DictMeta`] so the rest of the code reads plain fields instead of
//! string-keyed lookups. The tables and the structs must agree; the
//! conversion fails loudly (and tests pin the agreement) if they drift.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SettingsError;
use crate::store::{Document, WriteOptions};

/// The JSON type a setting is allowed to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// A plain string.
    Str,
    /// A boolean.
    Bool,
    /// A base-10 signed integer.
    Int,
}

/// Boolean words accepted by [`SettingKind::coerce`].
const TRUE_WORDS: [&str; 5] = ["true", "1", "t", "y", "yes"];
const FALSE_WORDS: [&str; 5] = ["false", "0", "f", "n", "no"];

impl SettingKind {
    /// Whether a JSON value already has this kind.
    ///
    /// Integers are bounded to `i64`; floats and out-of-range numbers
    /// do not match.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            SettingKind::Str => value.is_string(),
            SettingKind::Bool => value.is_boolean(),
            SettingKind::Int => value.is_i64(),
        }
    }

    /// Coerce override text into a value of this kind.
    ///
    /// Strings are taken verbatim. Booleans accept a fixed word list
    /// (case-insensitive): `true/1/t/y/yes` and `false/0/f/n/no`.
    /// Integers parse as base-10 `i64`.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidBool` or `SettingsError::InvalidInt`
    /// when the text cannot be converted.
    pub fn coerce(&self, raw: &str) -> Result<Value, SettingsError> {
        match self {
            SettingKind::Str => Ok(Value::String(raw.to_string())),
            SettingKind::Bool => parse_bool(raw).map(Value::Bool),
            SettingKind::Int => raw
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| SettingsError::InvalidInt {
                    value: raw.to_string(),
                }),
        }
    }
}

fn parse_bool(raw: &str) -> Result<bool, SettingsError> {
    let lowered = raw.to_lowercase();
    if TRUE_WORDS.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSE_WORDS.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err(SettingsError::InvalidBool {
            value: raw.to_string(),
        })
    }
}

/// A setting's default value, which also fixes its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingDefault {
    Str(&'static str),
    Bool(bool),
    Int(i64),
}

impl SettingDefault {
    /// The kind this default pins the setting to.
    pub fn kind(&self) -> SettingKind {
        match self {
            SettingDefault::Str(_) => SettingKind::Str,
            SettingDefault::Bool(_) => SettingKind::Bool,
            SettingDefault::Int(_) => SettingKind::Int,
        }
    }

    /// The default as a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            SettingDefault::Str(s) => Value::String((*s).to_string()),
            SettingDefault::Bool(b) => Value::Bool(*b),
            SettingDefault::Int(i) => Value::from(*i),
        }
    }
}

/// One row of a settings schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemaEntry {
    pub key: &'static str,
    pub default: SettingDefault,
}

/// A complete settings schema: the allowed keys in file order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schema {
    pub entries: &'static [SchemaEntry],
}

impl Schema {
    /// Whether the schema defines the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    /// Look up the entry for a key.
    pub fn entry(&self, key: &str) -> Option<&SchemaEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Build the all-defaults document, in schema order.
    pub fn default_document(&self) -> Document {
        self.entries
            .iter()
            .map(|e| (e.key.to_string(), e.default.to_value()))
            .collect()
    }
}

/// Schema for the global configuration file.
pub const CONFIG: Schema = Schema {
    entries: &[
        SchemaEntry {
            key: "src",
            default: SettingDefault::Str("my_dict"),
        },
        SchemaEntry {
            key: "no-clip-output",
            default: SettingDefault::Bool(false),
        },
        SchemaEntry {
            key: "no-print-output",
            default: SettingDefault::Bool(false),
        },
        SchemaEntry {
            key: "log-warnings",
            default: SettingDefault::Bool(true),
        },
        SchemaEntry {
            key: "treat-warnings-as-errors",
            default: SettingDefault::Bool(false),
        },
    ],
};

/// Schema for the per-dictionary metadata file.
pub const META: Schema = Schema {
    entries: &[
        SchemaEntry {
            key: "readonly",
            default: SettingDefault::Bool(false),
        },
        SchemaEntry {
            key: "no-add",
            default: SettingDefault::Bool(false),
        },
        SchemaEntry {
            key: "no-overwrite",
            default: SettingDefault::Bool(false),
        },
        SchemaEntry {
            key: "no-delete",
            default: SettingDefault::Bool(false),
        },
        SchemaEntry {
            key: "keep-sorted",
            default: SettingDefault::Bool(true),
        },
        SchemaEntry {
            key: "store-pretty",
            default: SettingDefault::Bool(true),
        },
    ],
};

/// Which settings document an override targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTarget {
    Config,
    Meta,
}

/// Decide which settings document an override key belongs to.
///
/// Config keys win lookups first; the two schemas share no keys, so the
/// order is only a tiebreak on paper.
///
/// # Errors
///
/// Returns `SettingsError::UnknownKey` if the key is in neither schema.
pub fn route_override(key: &str) -> Result<SettingsTarget, SettingsError> {
    if CONFIG.contains(key) {
        Ok(SettingsTarget::Config)
    } else if META.contains(key) {
        Ok(SettingsTarget::Meta)
    } else {
        Err(SettingsError::UnknownKey(key.to_string()))
    }
}

/// Effective global configuration.
///
/// # Example (on disk)
///
/// ```json
/// {
///     "src": "my_dict",
///     "no-clip-output": false,
///     "no-print-output": false,
///     "log-warnings": true,
///     "treat-warnings-as-errors": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Name of the selected dictionary.
    pub src: String,

    /// Suppress clipboard output.
    pub no_clip_output: bool,

    /// Suppress console output.
    pub no_print_output: bool,

    /// Print warnings (when not escalated).
    pub log_warnings: bool,

    /// Escalate every warning to a fatal error.
    pub treat_warnings_as_errors: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            src: "my_dict".to_string(),
            no_clip_output: false,
            no_print_output: false,
            log_warnings: true,
            treat_warnings_as_errors: false,
        }
    }
}

impl GlobalConfig {
    /// Convert a merged document into its typed form.
    ///
    /// The document must already be schema-conformant; a failure here
    /// means the schema table and this struct have drifted apart.
    pub fn from_document(doc: &Document) -> Result<Self, SettingsError> {
        from_document(doc)
    }

    /// Whether console output is enabled.
    pub fn print_enabled(&self) -> bool {
        !self.no_print_output
    }

    /// Whether clipboard output is enabled.
    pub fn clip_enabled(&self) -> bool {
        !self.no_clip_output
    }

    /// Whether at least one output sink is enabled.
    pub fn any_output_enabled(&self) -> bool {
        self.print_enabled() || self.clip_enabled()
    }
}

/// Effective per-dictionary metadata.
///
/// # Example (on disk)
///
/// ```json
/// {
///     "readonly": false,
///     "no-add": false,
///     "no-overwrite": false,
///     "no-delete": false,
///     "keep-sorted": true,
///     "store-pretty": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DictMeta {
    /// Forbid all mutation (additions and deletions).
    pub readonly: bool,

    /// Forbid additions.
    pub no_add: bool,

    /// Forbid overwriting an existing key.
    pub no_overwrite: bool,

    /// Forbid deletions.
    pub no_delete: bool,

    /// Write the dictionary sorted by key.
    pub keep_sorted: bool,

    /// Write the dictionary pretty-printed.
    pub store_pretty: bool,
}

impl Default for DictMeta {
    fn default() -> Self {
        Self {
            readonly: false,
            no_add: false,
            no_overwrite: false,
            no_delete: false,
            keep_sorted: true,
            store_pretty: true,
        }
    }
}

impl DictMeta {
    /// Convert a merged document into its typed form.
    ///
    /// The document must already be schema-conformant; a failure here
    /// means the schema table and this struct have drifted apart.
    pub fn from_document(doc: &Document) -> Result<Self, SettingsError> {
        from_document(doc)
    }

    /// Whether additions are permitted.
    pub fn allows_add(&self) -> bool {
        !(self.readonly || self.no_add)
    }

    /// Whether deletions are permitted.
    pub fn allows_delete(&self) -> bool {
        !(self.readonly || self.no_delete)
    }

    /// How the dictionary file should be rendered.
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            sort_keys: self.keep_sorted,
            pretty: self.store_pretty,
        }
    }
}

fn from_document<T: serde::de::DeserializeOwned>(doc: &Document) -> Result<T, SettingsError> {
    let value = serde_json::to_value(doc).map_err(|e| SettingsError::InternalError(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| SettingsError::InternalError(e.to_string()))
}
