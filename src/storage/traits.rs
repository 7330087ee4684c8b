//! Storage trait definitions

use crate::graph::{DepEdge, KeywordId};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for keyword/edge storage backends
///
/// Implementations must be thread-safe (Send + Sync); in the reference
/// pipeline access is sequential, but per-root diagram generation may be
/// parallelized by callers sharing a store read-only.
pub trait GraphStore: Send + Sync {
    /// Intern a keyword: return its existing id, or allocate and bind a new one
    fn intern(&self, text: &str) -> StorageResult<KeywordId>;

    /// Look up a keyword's id without interning it
    fn lookup(&self, text: &str) -> StorageResult<Option<KeywordId>>;

    /// Record a dependency edge; duplicates are a no-op
    ///
    /// Returns true if the edge was newly inserted.
    fn add_edge(&self, dependency: KeywordId, dependent: KeywordId) -> StorageResult<bool>;

    /// All (id, text) pairs in id order
    fn keywords(&self) -> StorageResult<Vec<(KeywordId, String)>>;

    /// All edges in insertion order
    fn edges(&self) -> StorageResult<Vec<DepEdge>>;
}

/// Extension trait for opening stores from paths
pub trait OpenStore: GraphStore + Sized {
    /// Open or create a store at the given path
    fn open(path: impl AsRef<Path>) -> StorageResult<Self>;

    /// Create an in-memory store (useful for testing)
    fn open_in_memory() -> StorageResult<Self>;
}
