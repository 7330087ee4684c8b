//! External layout and PDF tool invocation
//!
//! Fire-and-forget synchronous calls. A failure here names the artifact
//! that could not be produced and never corrupts in-memory graph state;
//! the pipeline reports it and moves on to the next root.

use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Errors from diagram rendering and PDF assembly
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not run {tool} for {artifact}: {source}")]
    Spawn {
        tool: &'static str,
        artifact: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed for {artifact}: {detail}")]
    Tool {
        tool: &'static str,
        artifact: String,
        detail: String,
    },

    #[error("IO error writing {artifact}: {source}")]
    Io {
        artifact: String,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// The identity of the artifact that failed
    pub fn artifact(&self) -> &str {
        match self {
            Self::Spawn { artifact, .. }
            | Self::Tool { artifact, .. }
            | Self::Io { artifact, .. } => artifact,
        }
    }
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Render a dot file to PDF with Graphviz
pub fn render_pdf(dot_path: &Path, pdf_path: &Path) -> RenderResult<()> {
    let artifact = pdf_path.display().to_string();
    let output = Command::new("dot")
        .arg("-Tpdf")
        .arg("-o")
        .arg(pdf_path)
        .arg(dot_path)
        .output()
        .map_err(|source| RenderError::Spawn {
            tool: "dot",
            artifact: artifact.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(RenderError::Tool {
            tool: "dot",
            artifact,
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

/// Merge per-root PDFs into a single document with pdfunite
pub fn merge_pdfs(inputs: &[PathBuf], out_path: &Path) -> RenderResult<()> {
    let artifact = out_path.display().to_string();
    if inputs.is_empty() {
        return Ok(());
    }

    let output = Command::new("pdfunite")
        .args(inputs)
        .arg(out_path)
        .output()
        .map_err(|source| RenderError::Spawn {
            tool: "pdfunite",
            artifact: artifact.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(RenderError::Tool {
            tool: "pdfunite",
            artifact,
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_with_no_inputs_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("merged.pdf");
        merge_pdfs(&[], &out).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn test_error_reports_artifact_identity() {
        let err = RenderError::Tool {
            tool: "dot",
            artifact: "diagrams/001-KEY_A.pdf".to_string(),
            detail: "syntax error".to_string(),
        };
        assert_eq!(err.artifact(), "diagrams/001-KEY_A.pdf");
        assert!(err.to_string().contains("001-KEY_A.pdf"));
    }
}
