//! Font selection for the Typst engine
//!
//! Fonts come from three places: explicit font files (glob patterns
//! allowed), directories searched by typst-kit, and the system font
//! database. The fonts bundled with typst-kit are always available, so a
//! host without any installed fonts still produces readable text.
//!
//! Only explicit files are read eagerly; directory and system fonts are
//! handed to the engine as lazy slots and loaded on first use.

use std::io;
use std::path::PathBuf;

use glob::glob;
use tracing::{debug, warn};
use typst_as_lib::typst_kit_options::TypstKitFontOptions;

use crate::error::{PdfError, Result};

/// Where to look for fonts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontSources {
    /// Font files or glob patterns; each must match at least one file
    pub files: Vec<PathBuf>,
    /// Directories searched recursively; missing ones are skipped
    pub dirs: Vec<PathBuf>,
    /// Also search the fonts installed on the host
    pub system: bool,
}

impl FontSources {
    /// Bundled fonts only
    pub fn bundled() -> Self {
        Self::default()
    }

    /// Bundled and installed system fonts
    pub fn system() -> Self {
        Self {
            system: true,
            ..Self::default()
        }
    }

    /// Expand `files` into concrete paths, sorted and deduplicated
    ///
    /// # Returns
    /// The matched font files, or `PdfError::Font` for an entry that is not
    /// a valid pattern or matches nothing
    pub fn expand_files(&self) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        for entry in &self.files {
            let pattern = entry.to_string_lossy();
            let paths = glob(&pattern).map_err(|e| {
                PdfError::font(entry, io::Error::new(io::ErrorKind::InvalidInput, e))
            })?;
            let matched: Vec<PathBuf> = paths
                .filter_map(|path| match path {
                    Ok(path) => Some(path),
                    Err(e) => {
                        warn!(error = %e, "could not read font path");
                        None
                    }
                })
                .filter(|path| path.is_file())
                .collect();
            if matched.is_empty() {
                return Err(PdfError::font(
                    entry,
                    io::Error::new(io::ErrorKind::NotFound, "no font file matches"),
                ));
            }
            found.extend(matched);
        }
        found.sort();
        found.dedup();
        Ok(found)
    }

    /// Read every explicit font file into memory
    pub fn read_files(&self) -> Result<Vec<Vec<u8>>> {
        self.expand_files()?
            .into_iter()
            .map(|path| std::fs::read(&path).map_err(|e| PdfError::font(path, e)))
            .collect()
    }

    /// Search directories that exist on this host
    pub fn existing_dirs(&self) -> Vec<PathBuf> {
        self.dirs
            .iter()
            .filter(|dir| {
                let exists = dir.is_dir();
                if !exists {
                    debug!(dir = %dir.display(), "font directory not found, skipping");
                }
                exists
            })
            .cloned()
            .collect()
    }

    /// typst-kit search options for the directory, system and bundled fonts
    pub fn search_options(&self) -> TypstKitFontOptions {
        TypstKitFontOptions::new()
            .include_system_fonts(self.system)
            .include_embedded_fonts(true)
            .include_dirs(self.existing_dirs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_expand_glob_pattern() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("truetype");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("Sans.ttf"), b"ttf").unwrap();
        fs::write(nested.join("Serif.ttf"), b"ttf").unwrap();
        fs::write(nested.join("README.txt"), b"not a font").unwrap();

        let sources = FontSources {
            files: vec![nested.join("*.ttf")],
            ..FontSources::default()
        };
        let found = sources.expand_files().unwrap();
        assert_eq!(found, vec![nested.join("Sans.ttf"), nested.join("Serif.ttf")]);
    }

    #[test]
    fn test_missing_dir_is_skipped() {
        let temp = TempDir::new().unwrap();
        let sources = FontSources {
            dirs: vec![PathBuf::from("/nonexistent/fonts"), temp.path().to_path_buf()],
            ..FontSources::default()
        };
        assert_eq!(sources.existing_dirs(), vec![temp.path().to_path_buf()]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let sources = FontSources {
            files: vec![PathBuf::from("/nonexistent/font.ttf")],
            ..FontSources::default()
        };
        assert!(matches!(sources.expand_files(), Err(PdfError::Font { .. })));
        assert!(matches!(sources.read_files(), Err(PdfError::Font { .. })));
    }

    #[test]
    fn test_read_files_reads_bytes() {
        let temp = TempDir::new().unwrap();
        let font = temp.path().join("Mono.ttf");
        fs::write(&font, b"font-bytes").unwrap();

        let sources = FontSources {
            files: vec![font],
            ..FontSources::default()
        };
        assert_eq!(sources.read_files().unwrap(), vec![b"font-bytes".to_vec()]);
    }

    #[test]
    fn test_constructors() {
        assert!(!FontSources::bundled().system);
        assert!(FontSources::system().system);
        assert!(FontSources::bundled().read_files().unwrap().is_empty());
    }
}
