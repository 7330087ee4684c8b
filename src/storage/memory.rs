//! In-memory store composing the registry and edge store

use std::sync::Mutex;

use super::traits::{GraphStore, StorageResult};
use crate::graph::{DepEdge, EdgeStore, KeywordId, KeywordRegistry};

/// In-memory graph store
///
/// Composes a [`KeywordRegistry`] and an [`EdgeStore`] behind the
/// [`GraphStore`] trait. Nothing is persisted; suitable for one-shot runs
/// and tests. Thread-safe via an internal mutex, matching the SQLite
/// backend's access pattern.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    registry: KeywordRegistry,
    edges: EdgeStore,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphStore for MemoryStore {
    fn intern(&self, text: &str) -> StorageResult<KeywordId> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.registry.intern(text))
    }

    fn lookup(&self, text: &str) -> StorageResult<Option<KeywordId>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.registry.lookup(text))
    }

    fn add_edge(&self, dependency: KeywordId, dependent: KeywordId) -> StorageResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.edges.add_edge(dependency, dependent))
    }

    fn keywords(&self) -> StorageResult<Vec<(KeywordId, String)>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .registry
            .iter()
            .map(|(id, name)| (id, name.to_string()))
            .collect())
    }

    fn edges(&self) -> StorageResult<Vec<DepEdge>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.edges.iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_is_idempotent_through_the_trait() {
        let store = MemoryStore::new();
        let a = store.intern("KEY_A").unwrap();
        let b = store.intern("KEY_A").unwrap();
        assert_eq!(a, b);
        assert_eq!(store.keywords().unwrap().len(), 1);
    }

    #[test]
    fn test_lookup_does_not_intern() {
        let store = MemoryStore::new();
        assert!(store.lookup("KEY_A").unwrap().is_none());
        assert!(store.keywords().unwrap().is_empty());
    }

    #[test]
    fn test_edges_round_trip() {
        let store = MemoryStore::new();
        let a = store.intern("A").unwrap();
        let b = store.intern("B").unwrap();
        assert!(store.add_edge(a, b).unwrap());
        assert!(!store.add_edge(a, b).unwrap());
        let edges = store.edges().unwrap();
        assert_eq!(edges, vec![DepEdge::new(a, b)]);
    }
}
