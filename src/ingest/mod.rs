//! CSV record reading
//!
//! The export format is plain comma-separated text with double-quoted
//! fields (the dependency lists contain `;` and occasionally commas, so
//! the exporting tool quotes them). Nothing in the example corpus needs
//! more than that, so the reader is a small scanner rather than a full
//! CSV implementation. Quoted fields may contain embedded newlines and
//! `""` escapes.

mod flatten;

pub use flatten::{flatten_records, write_csv};

use std::path::Path;
use thiserror::Error;

/// One parsed input record: an ordered list of field values
pub type CsvRecord = Vec<String>;

/// Errors that can occur while reading input files
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ingest operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Read and parse a CSV file into records
///
/// Blank lines are dropped. The header row is kept — skipping it is the
/// graph builder's job, not the reader's.
pub fn read_csv(path: impl AsRef<Path>) -> IngestResult<Vec<CsvRecord>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_records(&text))
}

/// Parse CSV text into records
pub fn parse_records(text: &str) -> Vec<CsvRecord> {
    let mut records: Vec<CsvRecord> = Vec::new();
    let mut record: CsvRecord = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                flush_record(&mut records, &mut record, &mut field);
            }
            '\n' => flush_record(&mut records, &mut record, &mut field),
            _ => field.push(c),
        }
    }
    flush_record(&mut records, &mut record, &mut field);

    records
}

/// Finish the current record, dropping blank lines
fn flush_record(records: &mut Vec<CsvRecord>, record: &mut CsvRecord, field: &mut String) {
    if record.is_empty() && field.is_empty() {
        return;
    }
    record.push(std::mem::take(field));
    records.push(std::mem::take(record));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_records() {
        let records = parse_records("a,b,c\nd,e,f\n");
        assert_eq!(records, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn test_quoted_field_with_separator() {
        let records = parse_records("tab,fn,opt,KEY_A,\"KEY_B;KEY_C\",rule\n");
        assert_eq!(records[0][4], "KEY_B;KEY_C");
    }

    #[test]
    fn test_escaped_quote() {
        let records = parse_records("\"say \"\"hi\"\"\",x\n");
        assert_eq!(records[0], vec!["say \"hi\"", "x"]);
    }

    #[test]
    fn test_quoted_field_with_newline() {
        let records = parse_records("\"line one\nline two\",x\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0][0], "line one\nline two");
    }

    #[test]
    fn test_blank_lines_dropped() {
        let records = parse_records("a,b\n\n\nc,d\n");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = parse_records("a,b\r\nc,d\r\n");
        assert_eq!(records, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_trailing_empty_field() {
        let records = parse_records("a,b,\n");
        assert_eq!(records[0], vec!["a", "b", ""]);
    }

    #[test]
    fn test_missing_final_newline() {
        let records = parse_records("a,b");
        assert_eq!(records, vec![vec!["a", "b"]]);
    }
}
