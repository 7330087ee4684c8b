//! Graphviz diagram description emission

use std::collections::HashSet;

use crate::graph::KeywordId;
use crate::query::KeywordPath;

/// Flatten enumerated paths into deduplicated edge pairs
///
/// Every path contributes its consecutive `(node, next)` pairs; duplicates
/// are dropped while preserving first-seen order. This is the only graph
/// logic the emitter carries.
pub fn collect_pairs(paths: &[KeywordPath]) -> Vec<(KeywordId, KeywordId)> {
    let mut seen: HashSet<(KeywordId, KeywordId)> = HashSet::new();
    let mut pairs = Vec::new();
    for path in paths {
        for window in path.windows(2) {
            let pair = (window[0], window[1]);
            if seen.insert(pair) {
                pairs.push(pair);
            }
        }
    }
    pairs
}

/// A per-root diagram description
///
/// Holds the root title and its ordered label pairs, and renders them as
/// Graphviz digraph text for the external layout tool. Highlighted labels
/// (skip markers) get a distinguishing fill color.
#[derive(Debug, Clone)]
pub struct DotDiagram {
    title: String,
    pairs: Vec<(String, String)>,
    highlights: Vec<String>,
}

impl DotDiagram {
    /// Create a diagram for the given root title and edge pairs
    pub fn new(title: impl Into<String>, pairs: Vec<(String, String)>) -> Self {
        Self {
            title: title.into(),
            pairs,
            highlights: Vec::new(),
        }
    }

    /// Give a node label a distinguishing fill color
    pub fn highlight(mut self, label: impl Into<String>) -> Self {
        self.highlights.push(label.into());
        self
    }

    /// The root title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render the Graphviz digraph text
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("digraph \"{}\" {{\n", escape(&self.title)));
        out.push_str(&format!("  label=\"{}\";\n", escape(&self.title)));
        out.push_str("  labelloc=t;\n");
        out.push_str("  node [style=filled, fillcolor=white];\n");
        for label in &self.highlights {
            out.push_str(&format!("  \"{}\" [fillcolor=yellow];\n", escape(label)));
        }
        for (source, target) in &self.pairs {
            out.push_str(&format!(
                "  \"{}\" -> \"{}\";\n",
                escape(source),
                escape(target)
            ));
        }
        out.push_str("}\n");
        out
    }
}

/// Escape a label for use inside a double-quoted dot string
fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
