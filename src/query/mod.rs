//! Queries over the built dependency graph
//!
//! Everything here operates on a snapshot taken from a `GraphStore` after
//! ingestion completes: adjacency projection, root selection, and the
//! path enumeration that drives per-root diagram generation.

mod adjacency;
mod paths;
mod roots;
mod types;

pub use adjacency::Adjacency;
pub use paths::PathEnumeration;
pub use roots::roots;
pub use types::{skip_marker_text, KeywordPath, SkipNode};
