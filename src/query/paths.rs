//! Exhaustive simple-path enumeration

use super::adjacency::Adjacency;
use super::types::{KeywordPath, SkipNode};
use crate::graph::KeywordId;

/// Query enumerating all simple paths from a start node
///
/// Returns every root-to-anywhere walk: the result contains one path for
/// each node visit, so a chain A → B → C yields `[A]`, `[A,B]` and
/// `[A,B,C]`. There is no global visited set — the same node may appear
/// in many distinct paths of one traversal; only a revisit within the
/// current path is suppressed. For densely connected graphs the path
/// count can be exponential; callers needing bounded cost must
/// pre-validate acyclicity.
#[derive(Debug, Clone)]
pub struct PathEnumeration {
    /// Starting node
    start: KeywordId,
    /// Optional node whose outgoing edges are not traversed
    skip: Option<SkipNode>,
}

impl PathEnumeration {
    /// Create an enumeration starting at the given node
    pub fn from(start: KeywordId) -> Self {
        Self { start, skip: None }
    }

    /// Exclude one node from traversal, recording it via its marker
    pub fn skipping(mut self, skip: SkipNode) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Execute the enumeration
    ///
    /// Always yields at least `[start]`. When a successor is the skip
    /// node, two synthetic two-node paths are recorded instead of
    /// descending: `[current, skip]` and `[skip, marker]`.
    ///
    /// Runs on an explicit work stack with a fresh accumulator per call;
    /// depth is bounded by the per-path revisit guard (at most the number
    /// of distinct nodes). Output is reproducible for a fixed graph and
    /// successor order, though not sorted.
    pub fn execute(&self, adjacency: &Adjacency) -> Vec<KeywordPath> {
        let mut results: Vec<KeywordPath> = Vec::new();
        let mut stack: Vec<KeywordPath> = vec![vec![self.start]];

        while let Some(path) = stack.pop() {
            let Some(&current) = path.last() else {
                continue;
            };

            for &succ in adjacency.successors(current) {
                match self.skip {
                    Some(skip) if succ == skip.node => {
                        results.push(vec![current, skip.node]);
                        results.push(vec![skip.node, skip.marker]);
                    }
                    _ => {
                        if !path.contains(&succ) {
                            let mut extended = path.clone();
                            extended.push(succ);
                            stack.push(extended);
                        }
                    }
                }
            }

            results.push(path);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DepEdge;

    fn id(n: i64) -> KeywordId {
        KeywordId::from_raw(n)
    }

    fn adjacency(node_count: i64, edges: &[(i64, i64)]) -> Adjacency {
        let keywords: Vec<(KeywordId, String)> = (1..=node_count)
            .map(|n| (id(n), format!("K{n}")))
            .collect();
        let edges: Vec<DepEdge> = edges
            .iter()
            .map(|&(a, b)| DepEdge::new(id(a), id(b)))
            .collect();
        Adjacency::project(&keywords, &edges)
    }

    fn sorted(mut paths: Vec<KeywordPath>) -> Vec<KeywordPath> {
        paths.sort();
        paths
    }

    #[test]
    fn test_node_without_successors_yields_itself() {
        let adj = adjacency(1, &[]);
        let paths = PathEnumeration::from(id(1)).execute(&adj);
        assert_eq!(paths, vec![vec![id(1)]]);
    }

    #[test]
    fn test_chain_yields_every_prefix() {
        // 1 -> 2 -> 3
        let adj = adjacency(3, &[(1, 2), (2, 3)]);
        let paths = sorted(PathEnumeration::from(id(1)).execute(&adj));
        assert_eq!(
            paths,
            vec![
                vec![id(1)],
                vec![id(1), id(2)],
                vec![id(1), id(2), id(3)],
            ]
        );
    }

    #[test]
    fn test_diamond_visits_shared_node_once_per_path() {
        // 1 -> 2 -> 4 and 1 -> 3 -> 4: node 4 appears in two paths
        let adj = adjacency(4, &[(1, 2), (1, 3), (2, 4), (3, 4)]);
        let paths = sorted(PathEnumeration::from(id(1)).execute(&adj));
        assert_eq!(
            paths,
            vec![
                vec![id(1)],
                vec![id(1), id(2)],
                vec![id(1), id(2), id(4)],
                vec![id(1), id(3)],
                vec![id(1), id(3), id(4)],
            ]
        );
    }

    #[test]
    fn test_skip_truncates_traversal() {
        // 1 -> 2 -> 3, skipping 2: nothing continues past 2 into 3
        let adj = adjacency(3, &[(1, 2), (2, 3)]);
        let marker = id(9);
        let paths = PathEnumeration::from(id(1))
            .skipping(SkipNode {
                node: id(2),
                marker,
            })
            .execute(&adj);

        assert!(paths.contains(&vec![id(1), id(2)]));
        assert!(paths.contains(&vec![id(2), marker]));
        assert!(
            paths.iter().all(|p| !p.contains(&id(3))),
            "no path may continue past the skip node"
        );
    }

    #[test]
    fn test_cycle_terminates() {
        // 1 -> 2 -> 1: the per-path revisit guard stops the loop
        let adj = adjacency(2, &[(1, 2), (2, 1)]);
        let paths = sorted(PathEnumeration::from(id(1)).execute(&adj));
        assert_eq!(paths, vec![vec![id(1)], vec![id(1), id(2)]]);
    }

    #[test]
    fn test_self_loop_is_not_followed() {
        let adj = adjacency(1, &[(1, 1)]);
        let paths = PathEnumeration::from(id(1)).execute(&adj);
        assert_eq!(paths, vec![vec![id(1)]]);
    }

    #[test]
    fn test_execute_is_reproducible() {
        let adj = adjacency(4, &[(1, 2), (1, 3), (2, 4), (3, 4)]);
        let query = PathEnumeration::from(id(1));
        assert_eq!(query.execute(&adj), query.execute(&adj));
    }
}
