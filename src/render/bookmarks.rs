//! Bookmark/table-of-contents emission for the merged PDF
//!
//! Emits pdftk `update_info` syntax, one top-level bookmark per diagram.
//! Purely presentational; nothing here reads the graph.

use std::path::Path;

use super::tools::{RenderError, RenderResult};

/// One table-of-contents entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkEntry {
    /// Diagram title (the root keyword)
    pub title: String,
    /// 1-based page number in the merged document
    pub page: usize,
}

/// Render entries as pdftk `update_info` bookmark text
pub fn bookmarks_text(entries: &[BookmarkEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str("BookmarkBegin\n");
        out.push_str(&format!("BookmarkTitle: {}\n", entry.title));
        out.push_str("BookmarkLevel: 1\n");
        out.push_str(&format!("BookmarkPageNumber: {}\n", entry.page));
    }
    out
}

/// Write the bookmark file
pub fn write_bookmarks(entries: &[BookmarkEntry], path: &Path) -> RenderResult<()> {
    std::fs::write(path, bookmarks_text(entries)).map_err(|source| RenderError::Io {
        artifact: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmarks_text_format() {
        let entries = vec![
            BookmarkEntry {
                title: "KEY_A".to_string(),
                page: 1,
            },
            BookmarkEntry {
                title: "KEY_B".to_string(),
                page: 2,
            },
        ];
        let text = bookmarks_text(&entries);
        assert_eq!(
            text,
            "BookmarkBegin\nBookmarkTitle: KEY_A\nBookmarkLevel: 1\nBookmarkPageNumber: 1\n\
             BookmarkBegin\nBookmarkTitle: KEY_B\nBookmarkLevel: 1\nBookmarkPageNumber: 2\n"
        );
    }

    #[test]
    fn test_empty_entries_yield_empty_file() {
        assert!(bookmarks_text(&[]).is_empty());
    }
}
