//! Adjacency projection: edge list → successor mapping

use std::collections::HashMap;

use crate::graph::{DepEdge, KeywordId};

/// In-memory adjacency mapping for traversal
///
/// Maps each keyword id to its ordered list of successors (dependents one
/// edge hop away). Built once after ingestion from a store snapshot and
/// never mutated during traversal. Every registered id has an entry, even
/// with no successors.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    successors: HashMap<KeywordId, Vec<KeywordId>>,
}

impl Adjacency {
    /// Project a keyword/edge snapshot into an adjacency mapping
    ///
    /// Successor order within each entry follows edge enumeration order.
    pub fn project(keywords: &[(KeywordId, String)], edges: &[DepEdge]) -> Self {
        let mut successors: HashMap<KeywordId, Vec<KeywordId>> = keywords
            .iter()
            .map(|(id, _)| (*id, Vec::new()))
            .collect();

        for edge in edges {
            successors.entry(edge.dependency).or_default().push(edge.dependent);
        }

        Self { successors }
    }

    /// Successors of a node, empty if the node has none or is unknown
    pub fn successors(&self, id: KeywordId) -> &[KeywordId] {
        self.successors.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the node has an entry
    pub fn contains(&self, id: KeywordId) -> bool {
        self.successors.contains_key(&id)
    }

    /// Number of nodes in the projection
    pub fn node_count(&self) -> usize {
        self.successors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> KeywordId {
        KeywordId::from_raw(n)
    }

    fn kw(n: i64, name: &str) -> (KeywordId, String) {
        (id(n), name.to_string())
    }

    #[test]
    fn test_every_keyword_has_an_entry() {
        let keywords = vec![kw(1, "A"), kw(2, "B"), kw(3, "C")];
        let edges = vec![DepEdge::new(id(1), id(2))];
        let adj = Adjacency::project(&keywords, &edges);

        assert_eq!(adj.node_count(), 3);
        assert!(adj.contains(id(3)));
        assert!(adj.successors(id(3)).is_empty());
    }

    #[test]
    fn test_successor_order_follows_edge_order() {
        let keywords = vec![kw(1, "A"), kw(2, "B"), kw(3, "C")];
        let edges = vec![
            DepEdge::new(id(1), id(3)),
            DepEdge::new(id(1), id(2)),
        ];
        let adj = Adjacency::project(&keywords, &edges);
        assert_eq!(adj.successors(id(1)), &[id(3), id(2)]);
    }

    #[test]
    fn test_unknown_node_has_no_successors() {
        let adj = Adjacency::project(&[], &[]);
        assert!(adj.successors(id(9)).is_empty());
    }
}
