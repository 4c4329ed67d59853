//! PDF rendering errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Failures while typesetting the cheatsheet
#[derive(Error, Debug)]
pub enum PdfError {
    /// The generated markup did not compile; carries Typst's diagnostics
    #[error("Typst compilation failed: {0}")]
    Compilation(String),

    /// The compiled document could not be exported
    #[error("PDF export failed: {0}")]
    Export(String),

    #[error("Failed to read font {path}: {source}")]
    Font {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PdfError {
    pub(crate) fn font(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PdfError::Font {
            path: path.into(),
            source,
        }
    }
}
