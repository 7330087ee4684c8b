//! Core graph data structures

mod builder;
mod edges;
mod error;
mod registry;


pub use builder::{split_dependencies, GraphBuilder, IngestSummary, RowShape};
pub use edges::{DepEdge, EdgeStore};
pub use error::{GraphError, GraphResult};
pub use registry::{KeywordId, KeywordRegistry};
