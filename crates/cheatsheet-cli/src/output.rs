//! Output writer
//!
//! Locates the plugin root and writes the generated artifacts. Each write
//! replaces the whole file; there is no atomic rename or backup.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Directory that marks the root of a Claude Code plugin
pub const PLUGIN_MARKER: &str = ".claude-plugin";

/// Filesystem errors while writing or checking artifacts
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A file written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub bytes: u64,
}

impl Artifact {
    /// Size in mebibytes with two decimals, e.g. `0.12 MB`
    pub fn size_mb(&self) -> String {
        format!("{:.2} MB", self.bytes as f64 / (1024.0 * 1024.0))
    }

    /// Size in kibibytes with two decimals, e.g. `13.42 KB`
    pub fn size_kb(&self) -> String {
        format!("{:.2} KB", self.bytes as f64 / 1024.0)
    }
}

/// Result of comparing a file on disk with freshly generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Current,
    Stale,
    Missing,
}

/// Nearest ancestor of `start` (inclusive) containing `.claude-plugin/`
///
/// Falls back to `start` itself when no plugin root is found.
pub fn find_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(PLUGIN_MARKER).is_dir() {
            debug!(root = %dir.display(), "found plugin root");
            return dir.to_path_buf();
        }
    }
    debug!(root = %start.display(), "no plugin marker, using start directory");
    start.to_path_buf()
}

/// Create the output directory if needed
pub fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `contents` to `path`, replacing any previous file
pub fn write_artifact(path: &Path, contents: &[u8]) -> Result<Artifact, OutputError> {
    fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = fs::metadata(path)
        .map_err(|source| OutputError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    debug!(path = %path.display(), bytes, "artifact written");
    Ok(Artifact {
        path: path.to_path_buf(),
        bytes,
    })
}

/// Compare the file at `path` with `expected`
pub fn check_artifact(path: &Path, expected: &str) -> Result<CheckOutcome, OutputError> {
    if !path.exists() {
        return Ok(CheckOutcome::Missing);
    }
    let actual = fs::read_to_string(path).map_err(|source| OutputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if actual == expected {
        Ok(CheckOutcome::Current)
    } else {
        Ok(CheckOutcome::Stale)
    }
}
