//! Keyword interning: stable integer ids for keyword strings

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::{GraphError, GraphResult};

/// Unique identifier for a keyword
///
/// Ids are small positive integers assigned in first-sight order, starting
/// at 1 so they line up with SQLite `INTEGER PRIMARY KEY` rowids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct KeywordId(i64);

impl KeywordId {
    /// Create a KeywordId from a raw integer (e.g. a database rowid)
    pub fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for KeywordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registry of keyword identities
///
/// Assigns a stable unique id to each distinct keyword string, idempotently.
/// The id → text mapping is total and immutable once set.
#[derive(Debug, Default, Clone)]
pub struct KeywordRegistry {
    /// Keyword texts in id order; id N lives at index N-1
    names: Vec<String>,
    /// Reverse index from text to id
    index: HashMap<String, KeywordId>,
}

impl KeywordRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a keyword, returning its id
    ///
    /// If `text` is already registered its existing id is returned with no
    /// side effect; otherwise the next unused id is allocated and bound.
    pub fn intern(&mut self, text: &str) -> KeywordId {
        if let Some(&id) = self.index.get(text) {
            return id;
        }
        let id = KeywordId(self.names.len() as i64 + 1);
        self.names.push(text.to_string());
        self.index.insert(text.to_string(), id);
        id
    }

    /// Reverse lookup: the text bound to `id`
    ///
    /// An id that was never interned indicates a broken invariant between
    /// the registry and the edge store, so this is a hard error.
    pub fn name_of(&self, id: KeywordId) -> GraphResult<&str> {
        let idx = usize::try_from(id.0 - 1).map_err(|_| GraphError::UnknownId(id))?;
        self.names
            .get(idx)
            .map(String::as_str)
            .ok_or(GraphError::UnknownId(id))
    }

    /// Look up an id by text without interning
    pub fn lookup(&self, text: &str) -> Option<KeywordId> {
        self.index.get(text).copied()
    }

    /// Number of registered keywords
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all (id, text) pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (KeywordId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (KeywordId(i as i64 + 1), name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_assigns_sequential_ids() {
        let mut reg = KeywordRegistry::new();
        let a = reg.intern("A");
        let b = reg.intern("B");
        assert_eq!(a.as_i64(), 1);
        assert_eq!(b.as_i64(), 2);
    }

    #[test]
    fn test_intern_is_idempotent() {
        let mut reg = KeywordRegistry::new();
        let first = reg.intern("KEY_FOO");
        let before = reg.len();
        let second = reg.intern("KEY_FOO");
        assert_eq!(first, second);
        assert_eq!(reg.len(), before, "second intern must not grow the registry");
    }

    #[test]
    fn test_name_of_round_trip() {
        let mut reg = KeywordRegistry::new();
        let id = reg.intern("KEY_BAR");
        assert_eq!(reg.name_of(id).unwrap(), "KEY_BAR");
    }

    #[test]
    fn test_name_of_unknown_id_is_an_error() {
        let reg = KeywordRegistry::new();
        let err = reg.name_of(KeywordId::from_raw(42)).unwrap_err();
        assert!(matches!(err, GraphError::UnknownId(id) if id.as_i64() == 42));
    }

    #[test]
    fn test_iter_preserves_id_order() {
        let mut reg = KeywordRegistry::new();
        reg.intern("C");
        reg.intern("A");
        reg.intern("B");
        let names: Vec<&str> = reg.iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
