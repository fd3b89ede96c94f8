//! adictools - personal key-value dictionaries from the command line
//!
//! adictools stores small named dictionaries as JSON files and exposes
//! them through one command: add an entry, get it back (printed and
//! copied to the clipboard), list everything, delete what's stale. A
//! persistent configuration file selects the active dictionary, and a
//! per-dictionary metadata file controls what that dictionary allows.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses flags, delegates to engine)
//! - [`engine`] - Runs one invocation: merge settings, apply operations, persist
//! - [`core`] - Domain types, settings schemas, and the in-memory dictionary
//! - [`store`] - JSON document persistence with corruption recovery
//! - [`ui`] - Console output, prompts, and the system clipboard
//!
//! # Correctness Invariants
//!
//! adictools maintains the following invariants:
//!
//! 1. Settings files on disk always conform to their schema after a run
//! 2. Operations apply in a fixed order regardless of flag order
//! 3. Stored data is never discarded without explicit confirmation
//! 4. File writes are atomic (temp file and rename)

pub mod cli;
pub mod core;
pub mod engine;
pub mod store;
pub mod ui;
