//! Keygraph: dependency graph engine for feature-model keyword exports
//!
//! Ingests a tabular export of keyword dependency declarations, builds a
//! directed graph (dependency → dependent), and enumerates all simple
//! paths from top-level keywords to drive per-root Graphviz diagrams.
//!
//! # Core Concepts
//!
//! - **Keywords**: unique named feature/option tokens, interned to stable ids
//! - **Dependency edges**: directed relations from prerequisite to dependent
//! - **Roots**: keywords with no incoming edges, one diagram each
//! - **Skip node**: one configurable node whose dependents are cut from
//!   traversal, recorded via a synthetic marker
//!
//! # Example
//!
//! ```
//! use keygraph::{Adjacency, GraphStore, MemoryStore, PathEnumeration};
//!
//! let store = MemoryStore::new();
//! let a = store.intern("KEY_A").unwrap();
//! let b = store.intern("KEY_B").unwrap();
//! store.add_edge(a, b).unwrap();
//!
//! let adjacency = Adjacency::project(&store.keywords().unwrap(), &store.edges().unwrap());
//! let paths = PathEnumeration::from(a).execute(&adjacency);
//! assert_eq!(paths.len(), 2); // [A] and [A, B]
//! ```

pub mod api;
pub mod graph;
pub mod ingest;
pub mod query;
pub mod render;
pub mod storage;

pub use api::{run, run_with_store, write_report, Report, RootReport, RunConfig, RunError};
pub use graph::{
    split_dependencies, DepEdge, EdgeStore, GraphBuilder, GraphError, GraphResult,
    IngestSummary, KeywordId, KeywordRegistry, RowShape,
};
pub use query::{roots, skip_marker_text, Adjacency, KeywordPath, PathEnumeration, SkipNode};
pub use render::{collect_pairs, BookmarkEntry, DotDiagram, RenderError, RenderResult};
pub use storage::{GraphStore, MemoryStore, OpenStore, SqliteStore, StorageError, StorageResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
