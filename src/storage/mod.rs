//! Storage backends
//!
//! Backends implement the `GraphStore` trait: `MemoryStore` for one-shot
//! runs and `SqliteStore` for persistent keyword/edge data.

mod memory;
mod sqlite;
mod traits;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{GraphStore, OpenStore, StorageError, StorageResult};
