//! cheatsheet-pdf - PDF rendering via Typst
//!
//! The PDF pipeline has two stages:
//!
//! 1. **Transpiler** - Converts the cheatsheet catalog to Typst markup that
//!    carries the print layout (A4, 0.75in margins, page-number footer)
//! 2. **Compiler** - Compiles Typst markup to PDF bytes, with the bundled
//!    fonts always available as a fallback
//!
//! Callers that only need bytes go through the [`PdfConverter`] trait.
//!
//! # Example
//!
//! ```ignore
//! use cheatsheet_catalog::catalog;
//! use cheatsheet_pdf::{PdfConverter, TypstConverter};
//!
//! let pdf = TypstConverter::new().render(catalog())?;
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

mod compiler;
mod error;
pub mod fonts;
mod transpiler;

use cheatsheet_catalog::Catalog;
use tracing::debug;

pub use compiler::Compiler;
pub use error::{PdfError, Result};
pub use fonts::FontSources;
pub use transpiler::Transpiler;

/// Converts a catalog to PDF bytes
pub trait PdfConverter {
    /// Render the whole cheatsheet
    ///
    /// # Arguments
    /// * `catalog` - Content to typeset
    ///
    /// # Returns
    /// Complete PDF file bytes
    fn render(&self, catalog: &Catalog) -> Result<Vec<u8>>;
}

/// [`PdfConverter`] backed by the Typst engine
///
/// Holds only font locations; font data is loaded during [`render`] and
/// directory or system fonts are read lazily by the engine.
///
/// [`render`]: PdfConverter::render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypstConverter {
    sources: FontSources,
}

impl TypstConverter {
    /// Converter using the bundled fonts only
    pub fn new() -> Self {
        Self::default()
    }

    /// Converter using fonts from `sources`
    ///
    /// # Arguments
    /// * `sources` - Font files, search directories and the system flag
    ///
    /// # Returns
    /// The converter, or `PdfError::Font` when an explicit font entry
    /// matches no file
    pub fn from_sources(sources: FontSources) -> Result<Self> {
        let files = sources.expand_files()?;
        Ok(Self {
            sources: FontSources { files, ..sources },
        })
    }

    /// Font locations handed to the engine
    pub fn sources(&self) -> &FontSources {
        &self.sources
    }
}

impl PdfConverter for TypstConverter {
    fn render(&self, catalog: &Catalog) -> Result<Vec<u8>> {
        let markup = Transpiler::transpile(catalog);
        debug!(
            bytes = markup.len(),
            fonts = self.sources.files.len(),
            dirs = self.sources.dirs.len(),
            "compiling typst markup"
        );
        Compiler::compile_with_sources(&markup, &self.sources)
    }
}

/// Convenience function to render the catalog to PDF with the bundled fonts
///
/// # Arguments
/// * `catalog` - Content to typeset
///
/// # Returns
/// PDF bytes on success
pub fn render_pdf(catalog: &Catalog) -> Result<Vec<u8>> {
    TypstConverter::new().render(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        let _ = Transpiler::transpile;
        let _ = Compiler::compile;
        let _ = render_pdf;
    }

    #[test]
    fn test_converter_keeps_expanded_sources() {
        assert_eq!(TypstConverter::new().sources(), &FontSources::bundled());

        let converter = TypstConverter::from_sources(FontSources::system()).unwrap();
        assert!(converter.sources().system);
    }

    #[test]
    fn test_converter_rejects_missing_font() {
        let sources = FontSources {
            files: vec!["/nonexistent/font.ttf".into()],
            ..FontSources::bundled()
        };
        assert!(matches!(
            TypstConverter::from_sources(sources),
            Err(PdfError::Font { .. })
        ));
    }
}
