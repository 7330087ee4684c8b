//! Query types and result structures

use crate::graph::KeywordId;

/// One walk from a root through zero or more edges, as a sequence of
/// keyword ids with no id repeated — except that the skip marker may
/// appear as a terminal pseudo-node.
pub type KeywordPath = Vec<KeywordId>;

/// A configured skip node with its marker pseudo-keyword
///
/// Traversal does not descend into `node`; instead the path is truncated
/// and `marker` (the `"<name> skipped..."` pseudo-keyword) records that
/// the cut happened. The marker id is synthetic — allocated outside the
/// store before enumeration and bound only in the run's label map, so it
/// can never persist as a real keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipNode {
    /// The node whose outgoing edges are not traversed
    pub node: KeywordId,
    /// The pseudo-keyword recording the truncation
    pub marker: KeywordId,
}

/// Marker text for a skipped node
pub fn skip_marker_text(name: &str) -> String {
    format!("{name} skipped...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_marker_text() {
        assert_eq!(skip_marker_text("KEY_OPT"), "KEY_OPT skipped...");
    }
}
