//! Root selection: keywords with no incoming dependency edges

use std::collections::HashSet;

use crate::graph::{DepEdge, KeywordId};

/// Select enumeration roots from a keyword/edge snapshot
///
/// A root is a keyword that never appears as an edge's dependent side —
/// a true top-level keyword nothing else points at. Results are ordered
/// by keyword text (ascending) so diagram ordering is deterministic and
/// human-meaningful.
pub fn roots(keywords: &[(KeywordId, String)], edges: &[DepEdge]) -> Vec<KeywordId> {
    let dependents: HashSet<KeywordId> = edges.iter().map(|e| e.dependent).collect();

    let mut selected: Vec<(&str, KeywordId)> = keywords
        .iter()
        .filter(|(id, _)| !dependents.contains(id))
        .map(|(id, name)| (name.as_str(), *id))
        .collect();
    selected.sort();

    selected.into_iter().map(|(_, id)| id).collect()
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
    fn test_chain_has_single_root() {
        // A -> B -> C: only A has no incoming edge
        let keywords = vec![kw(1, "A"), kw(2, "B"), kw(3, "C")];
        let edges = vec![
            DepEdge::new(id(1), id(2)),
            DepEdge::new(id(2), id(3)),
        ];
        assert_eq!(roots(&keywords, &edges), vec![id(1)]);
    }

    #[test]
    fn test_roots_sorted_by_text() {
        let keywords = vec![kw(1, "ZULU"), kw(2, "ALPHA"), kw(3, "MIKE")];
        let result = roots(&keywords, &[]);
        assert_eq!(result, vec![id(2), id(3), id(1)]);
    }

    #[test]
    fn test_self_loop_disqualifies() {
        // A node depending on itself has an incoming edge
        let keywords = vec![kw(1, "A"), kw(2, "B")];
        let edges = vec![DepEdge::new(id(1), id(1))];
        assert_eq!(roots(&keywords, &edges), vec![id(2)]);
    }

    #[test]
    fn test_empty_graph_has_no_roots() {
        assert!(roots(&[], &[]).is_empty());
    }
}
