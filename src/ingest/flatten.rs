//! One-dependency-per-row rewrite of the export
//!
//! The raw export packs every dependency of a keyword into a single
//! `;`-delimited cell, which spreadsheets and pivot tables handle badly.
//! Flattening emits one copy of each row per dependency, with the
//! dependency cell replaced by that single value.

use std::io::{BufWriter, Write};
use std::path::Path;

use super::{CsvRecord, IngestResult};
use crate::graph::split_dependencies;

/// Flatten records to one dependency per row
///
/// Every record is processed uniformly, the header included (its
/// dependency cell is one non-empty fragment, so it survives as a single
/// row). Records whose dependency cell holds no non-empty fragment are
/// dropped, as are records too short to have the dependency column.
pub fn flatten_records(records: &[CsvRecord], depends_col: usize) -> Vec<CsvRecord> {
    let mut out = Vec::new();
    for record in records {
        let Some(field) = record.get(depends_col) else {
            continue;
        };
        for dep in split_dependencies(field) {
            let mut row = record.clone();
            row[depends_col] = dep.to_string();
            out.push(row);
        }
    }
    out
}

/// Write records as CSV
///
/// Fields containing the separator, quotes, or newlines are quoted with
/// `""` escapes, so output survives a round trip through the reader.
pub fn write_csv(records: &[CsvRecord], path: impl AsRef<Path>) -> IngestResult<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        let line: Vec<String> = record.iter().map(|f| format_field(f)).collect();
        writeln!(writer, "{}", line.join(","))?;
    }
    writer.flush()?;
    Ok(())
}

fn format_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::parse_records;

    fn record(fields: &[&str]) -> CsvRecord {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flatten_multiplies_rows() {
        let records = vec![record(&["x", "y", "z", "KEY_A", "KEY_B;KEY_C", "r"])];
        let flat = flatten_records(&records, 4);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0][4], "KEY_B");
        assert_eq!(flat[1][4], "KEY_C");
        // All other cells are carried over unchanged
        assert_eq!(flat[0][3], "KEY_A");
        assert_eq!(flat[1][3], "KEY_A");
    }

    #[test]
    fn test_flatten_drops_empty_dependency_rows() {
        let records = vec![
            record(&["x", "y", "z", "KEY_A", "", "r"]),
            record(&["x", "y", "z", "KEY_B", ";;", "r"]),
        ];
        assert!(flatten_records(&records, 4).is_empty());
    }

    #[test]
    fn test_flatten_drops_short_rows() {
        let records = vec![record(&["only", "three", "cells"])];
        assert!(flatten_records(&records, 4).is_empty());
    }

    #[test]
    fn test_flatten_discards_trailing_fragments() {
        let records = vec![record(&["x", "y", "z", "KEY_A", "KEY_B;", "r"])];
        let flat = flatten_records(&records, 4);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0][4], "KEY_B");
    }

    #[test]
    fn test_written_csv_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.csv");
        let records = vec![
            record(&["a", "with,comma", "with \"quote\""]),
            record(&["b", "plain", ""]),
        ];
        write_csv(&records, &path).unwrap();
        let reread = parse_records(&std::fs::read_to_string(&path).unwrap());
        assert_eq!(reread, records);
    }
}
