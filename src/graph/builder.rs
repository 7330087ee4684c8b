//! Graph construction from tabular dependency declarations

use tracing::{debug, warn};

use super::error::{GraphError, GraphResult};
use crate::ingest::CsvRecord;
use crate::storage::GraphStore;

/// Which columns of an input record hold the graph data
///
/// The default matches the feature-model export layout: the primary keyword
/// in column 3 ("FM Selection") and the `;`-delimited dependency list in
/// column 4 ("FM Selection Dependencies").
#[derive(Debug, Clone, Copy)]
pub struct RowShape {
    /// Zero-based column index of the primary keyword field
    pub keyword_col: usize,
    /// Zero-based column index of the dependency-list field
    pub depends_col: usize,
}

impl Default for RowShape {
    fn default() -> Self {
        Self {
            keyword_col: 3,
            depends_col: 4,
        }
    }
}

/// Summary of one ingestion pass
#[derive(Debug, Default, Clone)]
pub struct IngestSummary {
    /// Data rows successfully ingested (header excluded)
    pub rows: usize,
    /// Edges newly inserted (duplicates excluded)
    pub edges_added: usize,
    /// Indexes of malformed rows that were skipped
    pub malformed: Vec<usize>,
}

/// Builds the dependency graph by writing rows through a [`GraphStore`]
///
/// For every dependency D declared by a primary keyword K, records the edge
/// D → K (prerequisite points at dependent).
pub struct GraphBuilder<'a, S: GraphStore + ?Sized> {
    store: &'a S,
    shape: RowShape,
}

impl<'a, S: GraphStore + ?Sized> GraphBuilder<'a, S> {
    /// Create a builder writing through the given store
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            shape: RowShape::default(),
        }
    }

    /// Override the row shape
    pub fn with_shape(mut self, shape: RowShape) -> Self {
        self.shape = shape;
        self
    }

    /// Ingest a full record set
    ///
    /// The first record is a header and produces no edges. Malformed rows
    /// (missing the keyword or dependency field) are warned about and
    /// skipped; ingestion continues with subsequent rows. Storage failures
    /// abort the pass.
    pub fn ingest(&self, records: &[CsvRecord]) -> GraphResult<IngestSummary> {
        let mut summary = IngestSummary::default();

        for (index, record) in records.iter().enumerate() {
            if index == 0 {
                continue;
            }
            match self.ingest_row(index, record) {
                Ok(added) => {
                    summary.rows += 1;
                    summary.edges_added += added;
                }
                Err(GraphError::MalformedRow { row }) => {
                    warn!(row, "skipping malformed row");
                    summary.malformed.push(row);
                }
                Err(e) => return Err(e),
            }
        }

        debug!(
            rows = summary.rows,
            edges = summary.edges_added,
            malformed = summary.malformed.len(),
            "ingestion complete"
        );
        Ok(summary)
    }

    /// Ingest a single data row, returning the number of edges inserted
    fn ingest_row(&self, index: usize, record: &CsvRecord) -> GraphResult<usize> {
        let keyword = record
            .get(self.shape.keyword_col)
            .ok_or(GraphError::MalformedRow { row: index })?;
        let depends_field = record
            .get(self.shape.depends_col)
            .ok_or(GraphError::MalformedRow { row: index })?;

        let dependent = self.store.intern(keyword)?;
        let mut added = 0;
        for dep in split_dependencies(depends_field) {
            let dependency = self.store.intern(dep)?;
            if self.store.add_edge(dependency, dependent)? {
                added += 1;
            }
        }
        Ok(added)
    }
}

/// Split a `;`-delimited dependency field, discarding empty fragments
///
/// Trailing and doubled separators are common in the exports; the empty
/// fragments they produce are not errors, just noise.
pub fn split_dependencies(field: &str) -> impl Iterator<Item = &str> {
    field.split(';').filter(|frag| !frag.is_empty())
}
