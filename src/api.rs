//! End-to-end pipeline
//!
//! `run` is the single consumer-facing entry point: read the export,
//! build the graph through a `GraphStore`, project adjacency, select
//! roots, enumerate paths per root, and emit diagrams plus the merged
//! PDF and its bookmarks. External tool failures are collected per
//! artifact and reported in the run summary, never aborting the run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::graph::{GraphBuilder, GraphError, KeywordId, RowShape};
use crate::ingest::{self, CsvRecord, IngestError};
use crate::query::{roots, skip_marker_text, Adjacency, PathEnumeration, SkipNode};
use crate::render::{
    collect_pairs, merge_pdfs, render_pdf, write_bookmarks, BookmarkEntry, DotDiagram,
};
use crate::storage::{GraphStore, MemoryStore, OpenStore, SqliteStore, StorageError};

/// Configuration for a full pipeline run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the export CSV
    pub csv: PathBuf,
    /// SQLite database path; None keeps the graph in memory
    pub db: Option<PathBuf>,
    /// Directory receiving diagrams, merged PDF, bookmarks
    pub out_dir: PathBuf,
    /// Keyword whose dependents are cut from traversal
    pub skip: Option<String>,
    /// Column layout of the export
    pub shape: RowShape,
    /// Invoke the external layout/merge tools
    pub render_pdf: bool,
}

/// Errors that abort a pipeline run
///
/// Per-artifact render failures do not appear here; they are collected
/// in [`Report::failed_artifacts`].
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-root outcome
#[derive(Debug, Clone, Serialize)]
pub struct RootReport {
    /// Root keyword text, used as the diagram title
    pub title: String,
    /// Enumerated path count
    pub paths: usize,
    /// Deduplicated edge-pair count
    pub pairs: usize,
    /// Diagram file name within the output directory
    pub diagram: String,
}

/// Machine-readable summary of one run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub keywords: usize,
    pub edges: usize,
    pub rows: usize,
    pub malformed_rows: usize,
    pub roots: Vec<RootReport>,
    /// Artifacts whose external tool invocation failed
    pub failed_artifacts: Vec<String>,
}

/// Run the full pipeline with the store selected by the config
pub fn run(config: &RunConfig) -> Result<Report, RunError> {
    let records = ingest::read_csv(&config.csv)?;
    match &config.db {
        Some(path) => run_with_store(config, &SqliteStore::open(path)?, &records),
        None => run_with_store(config, &MemoryStore::new(), &records),
    }
}

/// Run the pipeline against an already-opened store
pub fn run_with_store<S: GraphStore + ?Sized>(
    config: &RunConfig,
    store: &S,
    records: &[CsvRecord],
) -> Result<Report, RunError> {
    let summary = GraphBuilder::new(store)
        .with_shape(config.shape)
        .ingest(records)?;

    // Snapshot before the skip marker exists, so the marker can never
    // surface as a root or an adjacency entry.
    let keywords = store.keywords()?;
    let edges = store.edges()?;
    let adjacency = Adjacency::project(&keywords, &edges);
    let root_ids = roots(&keywords, &edges);
    info!(
        keywords = keywords.len(),
        edges = edges.len(),
        roots = root_ids.len(),
        "graph built"
    );

    let mut names: HashMap<KeywordId, String> = keywords.into_iter().collect();
    let keyword_count = names.len();
    let skip = resolve_skip(config.skip.as_deref(), &mut names);

    std::fs::create_dir_all(&config.out_dir)?;

    let mut root_reports = Vec::new();
    let mut failed_artifacts = Vec::new();
    let mut pdfs: Vec<PathBuf> = Vec::new();
    let mut bookmarks: Vec<BookmarkEntry> = Vec::new();

    for (index, &root) in root_ids.iter().enumerate() {
        let title = name_of(&names, root)?;

        let mut query = PathEnumeration::from(root);
        if let Some(skip) = skip {
            query = query.skipping(skip);
        }
        let paths = query.execute(&adjacency);
        let pairs = collect_pairs(&paths);

        let mut label_pairs = Vec::with_capacity(pairs.len());
        for &(source, target) in &pairs {
            label_pairs.push((name_of(&names, source)?, name_of(&names, target)?));
        }

        let mut diagram = DotDiagram::new(&title, label_pairs);
        if let Some(skip) = skip {
            let marker_label = name_of(&names, skip.marker)?;
            if pairs.iter().any(|&(_, t)| t == skip.marker) {
                diagram = diagram.highlight(marker_label);
            }
        }

        let file_name = format!("{:03}-{}.gv", index + 1, sanitize(&title));
        let dot_path = config.out_dir.join(&file_name);
        std::fs::write(&dot_path, diagram.to_dot())?;

        if config.render_pdf {
            let pdf_path = dot_path.with_extension("pdf");
            match render_pdf(&dot_path, &pdf_path) {
                Ok(()) => {
                    pdfs.push(pdf_path);
                    bookmarks.push(BookmarkEntry {
                        title: title.clone(),
                        page: pdfs.len(),
                    });
                }
                Err(e) => {
                    warn!(error = %e, "diagram render failed");
                    failed_artifacts.push(e.artifact().to_string());
                }
            }
        }

        root_reports.push(RootReport {
            title,
            paths: paths.len(),
            pairs: pairs.len(),
            diagram: file_name,
        });
    }

    if config.render_pdf && !pdfs.is_empty() {
        let merged = config.out_dir.join("diagrams.pdf");
        if let Err(e) = merge_pdfs(&pdfs, &merged) {
            warn!(error = %e, "PDF merge failed");
            failed_artifacts.push(e.artifact().to_string());
        }
        let bookmark_path = config.out_dir.join("bookmarks.txt");
        if let Err(e) = write_bookmarks(&bookmarks, &bookmark_path) {
            warn!(error = %e, "bookmark emission failed");
            failed_artifacts.push(e.artifact().to_string());
        }
    }

    Ok(Report {
        generated_at: Utc::now(),
        keywords: keyword_count,
        edges: edges.len(),
        rows: summary.rows,
        malformed_rows: summary.malformed.len(),
        roots: root_reports,
        failed_artifacts,
    })
}

/// Resolve the configured skip keyword against the built graph
///
/// The marker pseudo-keyword gets a synthetic id above the snapshot's
/// highest id and lives only in this run's label map — it is never
/// written through the store, so a persistent backend cannot accumulate
/// markers that would qualify as roots on later runs. A skip keyword
/// absent from the data is warned about and ignored rather than created.
fn resolve_skip(
    skip: Option<&str>,
    names: &mut HashMap<KeywordId, String>,
) -> Option<SkipNode> {
    let text = skip?;
    let node = names
        .iter()
        .find(|(_, name)| name.as_str() == text)
        .map(|(&id, _)| id);
    match node {
        Some(node) => {
            let marker = KeywordId::from_raw(
                names.keys().map(|id| id.as_i64()).max().unwrap_or(0) + 1,
            );
            let marker_text = skip_marker_text(text);
            names.insert(marker, marker_text);
            Some(SkipNode { node, marker })
        }
        None => {
            warn!(keyword = %text, "skip keyword not present in graph; ignoring");
            None
        }
    }
}

fn name_of(names: &HashMap<KeywordId, String>, id: KeywordId) -> Result<String, RunError> {
    names
        .get(&id)
        .cloned()
        .ok_or_else(|| GraphError::UnknownId(id).into())
}

/// File-name-safe version of a diagram title
fn sanitize(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// Write the run report as pretty-printed JSON
pub fn write_report(report: &Report, path: &Path) -> Result<(), RunError> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
