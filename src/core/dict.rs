//! core::dict
//!
//! The in-memory dictionary and listing rendering.
//!
//! # Ordering
//!
//! Entries keep their insertion order in memory (and on disk when
//! "keep-sorted" is off), so removals must shift rather than swap.
//! Listings are rendered sorted by key regardless of storage order.
//!
//! # Listing format
//!
//! Each row renders as `" {key}:{padding}{value}"`, padded so every
//! value starts in the same column. Widths count characters, not
//! bytes, so multibyte keys align correctly.

use crate::store::StringMap;

/// A named dictionary's entries, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: StringMap,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a loaded map.
    pub fn from_map(entries: StringMap) -> Self {
        Self { entries }
    }

    /// Borrow the underlying map (for persistence).
    pub fn as_map(&self) -> &StringMap {
        &self.entries
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite an entry. An existing key keeps its position.
    pub fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }

    /// Remove an entry, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render all entries as aligned lines, sorted by key.
    ///
    /// Empty dictionaries yield no lines; the caller decides on a
    /// placeholder.
    pub fn sorted_listing(&self) -> Vec<String> {
        let mut rows: Vec<(String, String)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        rows.sort();
        aligned_lines(&rows)
    }
}

/// Render key-value rows as `" {key}:{padding}{value}"` lines.
///
/// Padding is one or more spaces sized so every value starts in the
/// same column: `1 + max_key_width - key_width`, widths in characters.
pub fn aligned_lines(rows: &[(String, String)]) -> Vec<String> {
    let width = rows
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|(key, value)| {
            let padding = " ".repeat(1 + width - key.chars().count());
            format!(" {key}:{padding}{value}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(pairs: &[(&str, &str)]) -> Dictionary {
        let mut d = Dictionary::new();
        for (k, v) in pairs {
            d.insert((*k).to_string(), (*v).to_string());
        }
        d
    }

    #[test]
    fn insert_and_get() {
        let mut d = Dictionary::new();
        d.insert("a".into(), "1".into());
        assert_eq!(d.get("a"), Some("1"));
        assert_eq!(d.get("b"), None);
        assert!(d.contains_key("a"));
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut d = dict(&[("a", "1"), ("b", "2")]);
        d.insert("a".into(), "changed".into());

        let keys: Vec<&String> = d.as_map().keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(d.get("a"), Some("changed"));
    }

    #[test]
    fn remove_shifts_instead_of_swapping() {
        let mut d = dict(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
        assert_eq!(d.remove("a"), Some("1".to_string()));

        let keys: Vec<&String> = d.as_map().keys().collect();
        assert_eq!(keys, ["b", "c", "d"]);
    }

    #[test]
    fn remove_missing_returns_none() {
        let mut d = dict(&[("a", "1")]);
        assert_eq!(d.remove("zzz"), None);
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn single_entry_listing() {
        let d = dict(&[("a", "1")]);
        assert_eq!(d.sorted_listing(), vec![" a: 1"]);
    }

    #[test]
    fn listing_is_sorted_by_key() {
        let d = dict(&[("zebra", "stripes"), ("ant", "small")]);
        assert_eq!(d.sorted_listing(), vec![" ant:   small", " zebra: stripes"]);
    }

    #[test]
    fn listing_aligns_values_to_one_column() {
        let d = dict(&[("key", "v1"), ("much-longer-key", "v2"), ("x", "v3")]);
        let lines = d.sorted_listing();

        let columns: Vec<usize> = lines
            .iter()
            .map(|line| line.chars().count() - line.split(':').nth(1).unwrap().trim_start().chars().count())
            .collect();
        assert!(columns.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn alignment_counts_characters_not_bytes() {
        // "héllo" is 5 characters but 6 bytes
        let d = dict(&[("héllo", "world"), ("go", "fast")]);
        let lines = d.sorted_listing();

        assert_eq!(lines[0], " go:    fast");
        assert_eq!(lines[1], " héllo: world");
    }

    #[test]
    fn empty_dictionary_lists_nothing() {
        let d = Dictionary::new();
        assert!(d.sorted_listing().is_empty());
        assert!(d.is_empty());
    }

    #[test]
    fn aligned_lines_handles_empty_rows() {
        assert!(aligned_lines(&[]).is_empty());
    }

    #[test]
    fn values_may_contain_spaces() {
        let d = dict(&[("greeting", "hello there world")]);
        assert_eq!(d.sorted_listing(), vec![" greeting: hello there world"]);
    }
}
