//! Configuration settings
//!
//! Settings are loaded from an optional `cheatsheet.toml` in the project
//! root:
//!
//! ```toml
//! [output]
//! dir = "docs"
//! pdf_name = "CHEATSHEET.pdf"
//! markdown_name = "CHEATSHEET.md"
//! html = true
//!
//! [pdf]
//! fonts = ["fonts/Inter-*.ttf"]
//! font_dirs = ["assets/fonts"]
//! system_fonts = true
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file name looked up in the project root
pub const CONFIG_FILE: &str = "cheatsheet.toml";

/// Errors loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Output file settings
    pub output: OutputSettings,
    /// PDF rendering settings
    pub pdf: PdfSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from a file, resolving relative paths against its directory
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(settings.resolved_against(base))
    }

    /// Make every relative path absolute with respect to `base`
    pub fn resolved_against(mut self, base: &Path) -> Self {
        self.output.dir = self.output.dir.map(|dir| base.join(dir));
        self.pdf.fonts = self.pdf.fonts.into_iter().map(|f| base.join(f)).collect();
        self.pdf.font_dirs = self.pdf.font_dirs.into_iter().map(|d| base.join(d)).collect();
        self
    }
}

/// Output file configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory receiving the artifacts (defaults to the project root)
    pub dir: Option<PathBuf>,
    pub pdf_name: String,
    pub markdown_name: String,
    pub html_name: String,
    /// Also write the HTML document
    pub html: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: None,
            pdf_name: "CHEATSHEET.pdf".to_string(),
            markdown_name: "CHEATSHEET.md".to_string(),
            html_name: "CHEATSHEET.html".to_string(),
            html: false,
        }
    }
}

/// PDF rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfSettings {
    /// Font files or glob patterns handed to the typesetter
    pub fonts: Vec<PathBuf>,
    /// Extra directories searched recursively for fonts
    pub font_dirs: Vec<PathBuf>,
    /// Search the fonts installed on the host
    pub system_fonts: bool,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            fonts: Vec::new(),
            font_dirs: Vec::new(),
            system_fonts: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.output.pdf_name, "CHEATSHEET.pdf");
        assert_eq!(settings.output.markdown_name, "CHEATSHEET.md");
        assert!(!settings.output.html);
        assert!(settings.output.dir.is_none());
        assert!(settings.pdf.fonts.is_empty());
        assert!(settings.pdf.font_dirs.is_empty());
        assert!(settings.pdf.system_fonts);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_tables() {
        let settings = Settings::from_toml_str(
            r#"
[output]
markdown_name = "docs.md"
html = true

[pdf]
system_fonts = false
"#,
        )
        .unwrap();
        assert_eq!(settings.output.markdown_name, "docs.md");
        assert_eq!(settings.output.pdf_name, "CHEATSHEET.pdf");
        assert!(settings.output.html);
        assert!(!settings.pdf.system_fonts);
        assert!(settings.pdf.font_dirs.is_empty());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(Settings::from_toml_str("[output]\nhtml = \"yes\"").is_err());
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[output]\ndir = \"dist\"\n\n[pdf]\nfonts = [\"fonts/Inter.ttf\"]\nfont_dirs = [\"/abs/fonts\"]\n",
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.output.dir, Some(temp.path().join("dist")));
        assert_eq!(settings.pdf.fonts, vec![temp.path().join("fonts/Inter.ttf")]);
        assert_eq!(settings.pdf.font_dirs, vec![PathBuf::from("/abs/fonts")]);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[output\n").unwrap();
        assert!(matches!(Settings::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Settings::load(Path::new("/nonexistent/cheatsheet.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
