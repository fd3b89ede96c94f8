//! engine::apply
//!
//! Pure application of one request to an in-memory dictionary.
//!
//! # Architecture
//!
//! `apply` mutates the dictionary and returns an ordered stream of
//! [`Event`]s; it never touches the console, clipboard, or disk. The
//! caller walks the events in order, printing or copying outputs and
//! reporting or escalating warnings. Because escalation stops the walk
//! at the offending warning, anything the stream emitted earlier has
//! already reached its sinks, exactly as if each operation reported as
//! it ran.
//!
//! # Operation order
//!
//! Operations always run in a fixed order, regardless of flag order on
//! the command line:
//!
//! ```text
//! Add -> List/Get -> Delete
//! ```
//!
//! List and Get sit behind one shared output-permission gate, and the
//! gate itself is checked on every run: disabling both output sinks
//! warns even when neither List nor Get was requested.

use thiserror::Error;

use crate::core::dict::Dictionary;
use crate::core::settings::{DictMeta, GlobalConfig};

use super::Request;

/// A non-fatal condition surfaced to the user.
///
/// The display text is the exact console message; the `[Warning] `
/// prefix is added at print time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Warning {
    #[error("Configuration disallows additions.")]
    AddDisallowed,

    #[error("Configuration disallows overwriting.")]
    OverwriteDisallowed,

    #[error("Configuration disallows deletions.")]
    DeleteDisallowed,

    #[error("Configuration disallows any useful output.")]
    OutputDisallowed,

    #[error("There is no data stored for key \"{0}\".")]
    KeyNotFound(String),

    #[error("Key \"{0}\" could not be deleted (not found).")]
    DeleteKeyNotFound(String),
}

/// One ordered effect of applying a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Text bound for the enabled output sinks.
    Output(String),
    /// A warning to report or escalate.
    Warning(Warning),
}

/// Apply one request to the dictionary, honoring permission flags.
///
/// Returns the events in the order the operations produced them.
pub fn apply(
    dict: &mut Dictionary,
    meta: &DictMeta,
    config: &GlobalConfig,
    request: &Request,
) -> Vec<Event> {
    let mut events = Vec::new();

    // Add
    if let Some(add) = &request.add {
        if meta.allows_add() {
            if dict.contains_key(&add.key) && meta.no_overwrite {
                events.push(Event::Warning(Warning::OverwriteDisallowed));
            } else {
                dict.insert(add.key.clone(), add.values.join(" "));
            }
        } else {
            events.push(Event::Warning(Warning::AddDisallowed));
        }
    }

    // List / Get, behind the shared output gate
    if config.any_output_enabled() {
        if request.list {
            let lines = dict.sorted_listing();
            let text = if lines.is_empty() {
                format!("[Dictionary \"{}\" is empty]", config.src)
            } else {
                lines.join("\n")
            };
            events.push(Event::Output(text));
        }

        if let Some(key) = &request.get {
            match dict.get(key) {
                Some(value) => events.push(Event::Output(value.to_string())),
                None => events.push(Event::Warning(Warning::KeyNotFound(key.clone()))),
            }
        }
    } else {
        events.push(Event::Warning(Warning::OutputDisallowed));
    }

    // Delete
    if let Some(key) = &request.delete {
        if meta.allows_delete() {
            if dict.remove(key).is_none() {
                events.push(Event::Warning(Warning::DeleteKeyNotFound(key.clone())));
            }
        } else {
            events.push(Event::Warning(Warning::DeleteDisallowed));
        }
    }

    events
}
