//! Role Context Manager cheatsheet CLI - library
//!
//! Generates `CHEATSHEET.pdf` and `CHEATSHEET.md` (optionally
//! `CHEATSHEET.html`) from the content catalog and writes them to the
//! plugin's project root.
//!
//! # Library Usage
//!
//! ```ignore
//! use cheatsheet_catalog::catalog;
//! use cheatsheet_cli::{generate, OutputPlan};
//! use cheatsheet_pdf::TypstConverter;
//!
//! let plan = OutputPlan::new("/path/to/plugin".into(), &Default::default());
//! generate(catalog(), &TypstConverter::new(), &plan)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Generate both cheatsheets in the detected plugin root
//! rcm-cheatsheet
//!
//! # Write into another directory and also keep the HTML
//! rcm-cheatsheet --output-dir dist --emit-html
//!
//! # Fail if CHEATSHEET.md is stale
//! rcm-cheatsheet --check
//! ```

pub mod app;
pub mod config;
pub mod output;

pub use app::{
    check_command, generate, generate_command, resolve, run_cli, GenerateOptions,
    GenerationReport, OutputPlan,
};
pub use config::{ConfigError, OutputSettings, PdfSettings, Settings, CONFIG_FILE};
pub use output::{find_project_root, Artifact, CheckOutcome, OutputError, PLUGIN_MARKER};
