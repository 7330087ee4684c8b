//! Keygraph CLI — dependency graph diagrams for feature-model exports.
//!
//! Usage:
//!   keygraph build --csv FMM.csv [--db path] [--out dir] [--skip KEYWORD]
//!   keygraph flatten --csv FMM.csv --out FMM-flat.csv
//!   keygraph roots --csv FMM.csv

use clap::{Parser, Subcommand};
use keygraph::{
    api, ingest, roots, GraphBuilder, GraphStore, MemoryStore, RowShape, RunConfig,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "keygraph",
    version,
    about = "Dependency graph engine for feature-model keyword exports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the graph and emit per-root dependency diagrams
    Build {
        /// Path to the keyword export CSV
        #[arg(long)]
        csv: PathBuf,
        /// Path to the SQLite database file
        #[arg(long, conflicts_with = "persist")]
        db: Option<PathBuf>,
        /// Persist to the default database location instead of in-memory
        #[arg(long)]
        persist: bool,
        /// Output directory for diagrams and the merged PDF
        #[arg(long, default_value = "diagrams")]
        out: PathBuf,
        /// Keyword whose dependents are cut from traversal
        #[arg(long)]
        skip: Option<String>,
        /// Zero-based column index of the primary keyword
        #[arg(long, default_value_t = 3)]
        keyword_col: usize,
        /// Zero-based column index of the dependency list
        #[arg(long, default_value_t = 4)]
        depends_col: usize,
        /// Emit dot files only; skip PDF rendering and merging
        #[arg(long)]
        no_pdf: bool,
    },
    /// Rewrite the export with one dependency per row
    Flatten {
        /// Path to the keyword export CSV
        #[arg(long)]
        csv: PathBuf,
        /// Path for the flattened CSV
        #[arg(long)]
        out: PathBuf,
        /// Zero-based column index of the dependency list
        #[arg(long, default_value_t = 4)]
        depends_col: usize,
    },
    /// Print top-level keywords (no incoming dependency edges)
    Roots {
        /// Path to the keyword export CSV
        #[arg(long)]
        csv: PathBuf,
        /// Zero-based column index of the primary keyword
        #[arg(long, default_value_t = 3)]
        keyword_col: usize,
        /// Zero-based column index of the dependency list
        #[arg(long, default_value_t = 4)]
        depends_col: usize,
    },
}

/// Get the default database path (~/.local/share/keygraph/keygraph.db)
fn default_db_path() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    let keygraph_dir = data_dir.join("keygraph");
    std::fs::create_dir_all(&keygraph_dir).ok();
    keygraph_dir.join("keygraph.db")
}

fn cmd_build(
    csv: PathBuf,
    db: Option<PathBuf>,
    persist: bool,
    out: PathBuf,
    skip: Option<String>,
    shape: RowShape,
    no_pdf: bool,
) -> i32 {
    let db = match (db, persist) {
        (Some(path), _) => Some(path),
        (None, true) => Some(default_db_path()),
        (None, false) => None,
    };
    let config = RunConfig {
        csv,
        db,
        out_dir: out.clone(),
        skip,
        shape,
        render_pdf: !no_pdf,
    };

    let report = match api::run(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    println!(
        "Processed {} rows: {} keywords, {} edges, {} roots",
        report.rows,
        report.keywords,
        report.edges,
        report.roots.len()
    );
    if report.malformed_rows > 0 {
        println!("Skipped {} malformed rows", report.malformed_rows);
    }
    for failed in &report.failed_artifacts {
        eprintln!("Failed artifact: {}", failed);
    }

    let report_path = out.join("report.json");
    if let Err(e) = api::write_report(&report, &report_path) {
        eprintln!("Error writing report: {}", e);
        return 1;
    }
    0
}

fn cmd_flatten(csv: PathBuf, out: PathBuf, depends_col: usize) -> i32 {
    let records = match ingest::read_csv(&csv) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let flat = ingest::flatten_records(&records, depends_col);
    if let Err(e) = ingest::write_csv(&flat, &out) {
        eprintln!("Error: {}", e);
        return 1;
    }
    println!("Wrote {} rows to {}", flat.len(), out.display());
    0
}

fn cmd_roots(csv: PathBuf, shape: RowShape) -> i32 {
    let records = match ingest::read_csv(&csv) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let store = MemoryStore::new();
    let result = GraphBuilder::new(&store)
        .with_shape(shape)
        .ingest(&records)
        .and_then(|_| {
            let keywords = store.keywords()?;
            let edges = store.edges()?;
            Ok((keywords, edges))
        });
    match result {
        Ok((keywords, edges)) => {
            let names: std::collections::HashMap<_, _> = keywords.iter().cloned().collect();
            for id in roots(&keywords, &edges) {
                if let Some(name) = names.get(&id) {
                    println!("{}", name);
                }
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Build {
            csv,
            db,
            persist,
            out,
            skip,
            keyword_col,
            depends_col,
            no_pdf,
        } => cmd_build(
            csv,
            db,
            persist,
            out,
            skip,
            RowShape {
                keyword_col,
                depends_col,
            },
            no_pdf,
        ),
        Commands::Flatten {
            csv,
            out,
            depends_col,
        } => cmd_flatten(csv, out, depends_col),
        Commands::Roots {
            csv,
            keyword_col,
            depends_col,
        } => cmd_roots(
            csv,
            RowShape {
                keyword_col,
                depends_col,
            },
        ),
    };
    std::process::exit(code);
}
