//! Error types for graph construction

use thiserror::Error;

use super::registry::KeywordId;
use crate::storage::StorageError;

/// Errors that can occur while building the dependency graph
#[derive(Debug, Error)]
pub enum GraphError {
    /// Input record is missing a required field
    #[error("malformed row {row}: missing required field")]
    MalformedRow { row: usize },

    /// Reverse lookup of an id that was never interned — indicates a broken
    /// invariant between the registry and the edge store
    #[error("unknown keyword id: {0}")]
    UnknownId(KeywordId),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
