//! Diagram emission and external tool glue

mod bookmarks;
mod dot;
mod tools;

pub use bookmarks::{bookmarks_text, write_bookmarks, BookmarkEntry};
pub use dot::{collect_pairs, DotDiagram};
pub use tools::{merge_pdfs, render_pdf, RenderError, RenderResult};
