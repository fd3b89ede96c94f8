//! core
//!
//! Core domain types, schemas, and operations.
//!
//! # Modules
//!
//! - [`types`] - Strong types: DictName
//! - [`dict`] - In-memory dictionary and listing rendering
//! - [`settings`] - Settings schemas, healing merge, and overrides
//! - [`paths`] - Centralized path routing for tool storage
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict and self-describing
//! - Settings files heal instead of rejecting stale content

pub mod dict;
pub mod paths;
pub mod settings;
pub mod types;
