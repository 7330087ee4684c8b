//! Directed dependency edges between keyword ids

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::registry::KeywordId;

/// A directed dependency edge
///
/// Points from prerequisite to the thing that depends on it:
/// `dependency` must be satisfied for `dependent` to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepEdge {
    /// The prerequisite keyword (edge source)
    pub dependency: KeywordId,
    /// The keyword that depends on it (edge target)
    pub dependent: KeywordId,
}

impl DepEdge {
    /// Create a new edge from prerequisite to dependent
    pub fn new(dependency: KeywordId, dependent: KeywordId) -> Self {
        Self {
            dependency,
            dependent,
        }
    }
}

/// Deduplicated store of dependency edges
///
/// First write wins; re-adding an existing pair is a no-op. Enumeration
/// order is insertion order (stable, not otherwise significant).
/// Self-loops are not rejected — buggy inputs are preserved as-is.
#[derive(Debug, Default, Clone)]
pub struct EdgeStore {
    edges: Vec<DepEdge>,
    seen: HashSet<(KeywordId, KeywordId)>,
}

impl EdgeStore {
    /// Create an empty edge store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an edge if not already present
    ///
    /// Returns true if the edge was newly inserted.
    pub fn add_edge(&mut self, dependency: KeywordId, dependent: KeywordId) -> bool {
        if !self.seen.insert((dependency, dependent)) {
            return false;
        }
        self.edges.push(DepEdge::new(dependency, dependent));
        true
    }

    /// Iterate over all edges in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &DepEdge> {
        self.edges.iter()
    }

    /// Number of stored edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> KeywordId {
        KeywordId::from_raw(n)
    }

    #[test]
    fn test_add_edge_deduplicates() {
        let mut store = EdgeStore::new();
        assert!(store.add_edge(id(1), id(2)));
        assert!(!store.add_edge(id(1), id(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_reversed_pair_is_distinct() {
        let mut store = EdgeStore::new();
        store.add_edge(id(1), id(2));
        store.add_edge(id(2), id(1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_self_loop_is_kept() {
        let mut store = EdgeStore::new();
        assert!(store.add_edge(id(3), id(3)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_iteration_is_insertion_ordered() {
        let mut store = EdgeStore::new();
        store.add_edge(id(2), id(1));
        store.add_edge(id(3), id(1));
        store.add_edge(id(1), id(4));
        let pairs: Vec<(i64, i64)> = store
            .iter()
            .map(|e| (e.dependency.as_i64(), e.dependent.as_i64()))
            .collect();
        assert_eq!(pairs, vec![(2, 1), (3, 1), (1, 4)]);
    }
}
