//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib.

use std::path::{Path, PathBuf};

use crate::error::{PdfError, Result};
use crate::fonts::FontSources;
use tracing::{debug, warn};
use typst_as_lib::TypstEngine;

/// Compiler for converting Typst markup to PDF
pub struct Compiler;

impl Compiler {
    /// Compile Typst markup to PDF bytes with the bundled fonts
    ///
    /// # Arguments
    /// * `markup` - Typst markup string
    ///
    /// # Returns
    /// PDF bytes on success
    pub fn compile(markup: &str) -> Result<Vec<u8>> {
        Self::compile_with_sources(markup, &FontSources::bundled())
    }

    /// Compile with additional font files
    ///
    /// # Arguments
    /// * `markup` - Typst markup string
    /// * `font_paths` - Font files (or glob patterns) to include
    ///
    /// # Returns
    /// PDF bytes on success, `PdfError::Font` if a font cannot be read
    pub fn compile_with_fonts<P: AsRef<Path>>(
        markup: &str,
        font_paths: &[P],
    ) -> Result<Vec<u8>> {
        let sources = FontSources {
            files: font_paths.iter().map(|p| PathBuf::from(p.as_ref())).collect(),
            ..FontSources::bundled()
        };
        Self::compile_with_sources(markup, &sources)
    }

    /// Compile with fonts from every configured source
    ///
    /// Explicit font files are read and moved into the engine; directory,
    /// system and bundled fonts are registered as lazy slots.
    ///
    /// # Arguments
    /// * `markup` - Typst markup string
    /// * `sources` - Where to look for fonts
    ///
    /// # Returns
    /// PDF bytes on success
    pub fn compile_with_sources(markup: &str, sources: &FontSources) -> Result<Vec<u8>> {
        let files = sources.read_files()?;
        debug!(explicit = files.len(), system = sources.system, "registering fonts");

        let mut builder = TypstEngine::builder()
            .main_file(markup.to_string())
            .search_fonts_with(sources.search_options());
        if !files.is_empty() {
            builder = builder.fonts(files);
        }
        let engine = builder.build();

        let compiled = engine.compile();
        for warning in &compiled.warnings {
            warn!(message = %warning.message, "typst warning");
        }

        let document = compiled
            .output
            .map_err(|e| PdfError::Compilation(format!("{:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| PdfError::Export(format!("{:?}", e)))?;

        Ok(pdf_bytes.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embeds_font(pdf: &[u8]) -> bool {
        pdf.windows(b"/FontFile".len()).any(|w| w == b"/FontFile")
    }

    #[test]
    fn test_compile_simple() {
        let markup = "= Hello World\n\nThis is a test document.";
        let result = Compiler::compile(markup);

        assert!(result.is_ok(), "Compilation failed: {:?}", result.err());

        let pdf = result.unwrap();
        assert!(pdf.starts_with(b"%PDF-"), "Output doesn't start with PDF header");
    }

    #[test]
    fn test_bundled_fonts_carry_text() {
        let pdf = Compiler::compile("Hello").unwrap();
        assert!(embeds_font(&pdf), "no font embedded, text would be invisible");
    }

    #[test]
    fn test_empty_font_dir_still_has_text() {
        let sources = FontSources {
            dirs: vec![PathBuf::from("/nonexistent/fonts")],
            ..FontSources::bundled()
        };
        let pdf = Compiler::compile_with_sources("Hello", &sources).unwrap();
        assert!(embeds_font(&pdf));
    }

    #[test]
    fn test_compile_reports_errors() {
        let result = Compiler::compile("#let x = (");
        assert!(matches!(result, Err(PdfError::Compilation(_))));
    }

    #[test]
    fn test_missing_font_file() {
        let result = Compiler::compile_with_fonts("Hello", &["/nonexistent/font.ttf"]);
        assert!(matches!(result, Err(PdfError::Font { .. })));
    }
}
