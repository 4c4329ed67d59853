//! End-to-end tests for the generator pipeline
//!
//! Most tests replace PDF rendering with a stub converter so they exercise
//! root detection, config loading and file emission without Typst. The
//! `generate_command` tests run the real converter.

use std::fs;
use std::path::Path;

use cheatsheet_catalog::{catalog, Catalog};
use cheatsheet_cli::{
    check_command, generate, generate_command, resolve, GenerateOptions, OutputPlan,
    OutputSettings, CONFIG_FILE, PLUGIN_MARKER,
};
use cheatsheet_pdf::{PdfConverter, PdfError};
use cheatsheet_render::{render_html, render_markdown};
use tempfile::TempDir;

const STUB_PDF: &[u8] = b"%PDF-1.7 stub";

struct StubConverter;

impl PdfConverter for StubConverter {
    fn render(&self, _catalog: &Catalog) -> cheatsheet_pdf::Result<Vec<u8>> {
        Ok(STUB_PDF.to_vec())
    }
}

struct FailingConverter;

impl PdfConverter for FailingConverter {
    fn render(&self, _catalog: &Catalog) -> cheatsheet_pdf::Result<Vec<u8>> {
        Err(PdfError::Compilation("no engine".to_string()))
    }
}

fn plugin_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(PLUGIN_MARKER)).unwrap();
    temp
}

fn default_plan(dir: &Path) -> OutputPlan {
    OutputPlan::new(dir.to_path_buf(), &OutputSettings::default())
}

fn embeds_font(pdf: &[u8]) -> bool {
    pdf.windows(b"/FontFile".len()).any(|w| w == b"/FontFile")
}

#[test]
fn test_generates_both_artifacts() {
    let temp = plugin_dir();
    let report = generate(catalog(), &StubConverter, &default_plan(temp.path())).unwrap();

    let pdf_path = temp.path().join("CHEATSHEET.pdf");
    let md_path = temp.path().join("CHEATSHEET.md");

    let pdf = fs::read(&pdf_path).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
    assert_eq!(fs::read_to_string(&md_path).unwrap(), render_markdown(catalog()));

    let pdf_artifact = report.pdf.unwrap();
    assert_eq!(pdf_artifact.path, pdf_path);
    assert_eq!(pdf_artifact.bytes, STUB_PDF.len() as u64);
    assert_eq!(report.markdown.path, md_path);
    assert!(report.markdown.bytes > 0);
    assert!(report.html.is_none());
    assert!(!temp.path().join("CHEATSHEET.html").exists());
}

#[test]
fn test_rerun_overwrites_previous_output() {
    let temp = plugin_dir();
    let md_path = temp.path().join("CHEATSHEET.md");
    let garbage = "x".repeat(render_markdown(catalog()).len() * 2);
    fs::write(&md_path, &garbage).unwrap();
    fs::write(temp.path().join("CHEATSHEET.pdf"), &garbage).unwrap();

    let plan = default_plan(temp.path());
    generate(catalog(), &StubConverter, &plan).unwrap();
    generate(catalog(), &StubConverter, &plan).unwrap();

    assert_eq!(fs::read_to_string(&md_path).unwrap(), render_markdown(catalog()));
    assert_eq!(fs::read(temp.path().join("CHEATSHEET.pdf")).unwrap(), STUB_PDF);
}

#[test]
fn test_skip_pdf_writes_markdown_only() {
    let temp = plugin_dir();
    let plan = default_plan(temp.path()).without_pdf();
    let report = generate(catalog(), &FailingConverter, &plan).unwrap();

    assert!(report.pdf.is_none());
    assert!(!temp.path().join("CHEATSHEET.pdf").exists());
    assert!(temp.path().join("CHEATSHEET.md").exists());
}

#[test]
fn test_emit_html() {
    let temp = plugin_dir();
    let settings = OutputSettings::default();
    let plan = OutputPlan::new(temp.path().to_path_buf(), &settings).with_html(&settings);
    let report = generate(catalog(), &StubConverter, &plan).unwrap();

    let html_path = temp.path().join("CHEATSHEET.html");
    assert_eq!(report.html.unwrap().path, html_path);
    assert_eq!(fs::read_to_string(html_path).unwrap(), render_html(catalog()));
}

#[test]
fn test_pdf_failure_stops_before_markdown() {
    let temp = plugin_dir();
    let result = generate(catalog(), &FailingConverter, &default_plan(temp.path()));

    assert!(result.is_err());
    assert!(!temp.path().join("CHEATSHEET.pdf").exists());
    assert!(!temp.path().join("CHEATSHEET.md").exists());
}

#[test]
fn test_creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("dist/docs");
    generate(catalog(), &StubConverter, &default_plan(&dir)).unwrap();
    assert!(dir.join("CHEATSHEET.md").is_file());
}

#[test]
fn test_resolve_uses_plugin_root() {
    let temp = plugin_dir();
    let nested = temp.path().join("scripts");
    fs::create_dir(&nested).unwrap();

    let (_, plan) = resolve(&GenerateOptions::default(), &nested).unwrap();
    assert_eq!(plan.dir, temp.path());
    assert_eq!(plan.markdown, temp.path().join("CHEATSHEET.md"));
    assert_eq!(plan.pdf, Some(temp.path().join("CHEATSHEET.pdf")));
}

#[test]
fn test_resolve_output_dir_flag_wins() {
    let temp = plugin_dir();
    fs::write(temp.path().join(CONFIG_FILE), "[output]\ndir = \"from-config\"\n").unwrap();

    let options = GenerateOptions {
        output_dir: Some("from-flag".into()),
        ..Default::default()
    };
    let (_, plan) = resolve(&options, temp.path()).unwrap();
    assert_eq!(plan.dir, temp.path().join("from-flag"));
}

#[test]
fn test_resolve_reads_config_from_root() {
    let temp = plugin_dir();
    fs::write(
        temp.path().join(CONFIG_FILE),
        "[output]\ndir = \"docs\"\nmarkdown_name = \"REFERENCE.md\"\nhtml = true\n",
    )
    .unwrap();

    let (settings, plan) = resolve(&GenerateOptions::default(), temp.path()).unwrap();
    assert_eq!(settings.output.markdown_name, "REFERENCE.md");
    assert_eq!(plan.markdown, temp.path().join("docs/REFERENCE.md"));
    assert_eq!(plan.html, Some(temp.path().join("docs/CHEATSHEET.html")));
}

#[test]
fn test_resolve_explicit_config_must_exist() {
    let temp = plugin_dir();
    let options = GenerateOptions {
        config: Some("missing.toml".into()),
        ..Default::default()
    };
    assert!(resolve(&options, temp.path()).is_err());
}

#[test]
fn test_resolve_flags_adjust_plan() {
    let temp = plugin_dir();
    let options = GenerateOptions {
        emit_html: true,
        skip_pdf: true,
        ..Default::default()
    };
    let (_, plan) = resolve(&options, temp.path()).unwrap();
    assert!(plan.pdf.is_none());
    assert_eq!(plan.html, Some(temp.path().join("CHEATSHEET.html")));
}

#[test]
fn test_check_detects_drift() {
    let temp = plugin_dir();
    let options = GenerateOptions::default();

    // Missing
    assert!(check_command(&options, temp.path()).is_err());

    generate(catalog(), &StubConverter, &default_plan(temp.path())).unwrap();
    assert!(check_command(&options, temp.path()).is_ok());

    let md_path = temp.path().join("CHEATSHEET.md");
    fs::write(&md_path, "# Outdated\n").unwrap();
    assert!(check_command(&options, temp.path()).is_err());
    // Check never rewrites the file
    assert_eq!(fs::read_to_string(&md_path).unwrap(), "# Outdated\n");
}

#[test]
fn test_generate_command_with_default_settings() {
    let temp = plugin_dir();
    let report = generate_command(&GenerateOptions::default(), temp.path()).unwrap();

    let pdf = fs::read(temp.path().join("CHEATSHEET.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(embeds_font(&pdf));
    assert_eq!(report.pdf.unwrap().bytes, pdf.len() as u64);
    assert_eq!(
        fs::read_to_string(temp.path().join("CHEATSHEET.md")).unwrap(),
        render_markdown(catalog())
    );
}

#[test]
fn test_generate_command_without_host_fonts() {
    let temp = plugin_dir();
    fs::write(
        temp.path().join(CONFIG_FILE),
        "[pdf]\nsystem_fonts = false\nfont_dirs = []\n",
    )
    .unwrap();

    generate_command(&GenerateOptions::default(), temp.path()).unwrap();

    let pdf = fs::read(temp.path().join("CHEATSHEET.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(embeds_font(&pdf), "bundled fonts should always be embedded");
}

#[test]
fn test_generate_command_rejects_missing_font() {
    let temp = plugin_dir();
    fs::write(
        temp.path().join(CONFIG_FILE),
        "[pdf]\nfonts = [\"fonts/Missing.ttf\"]\n",
    )
    .unwrap();

    assert!(generate_command(&GenerateOptions::default(), temp.path()).is_err());
    assert!(!temp.path().join("CHEATSHEET.pdf").exists());
    assert!(!temp.path().join("CHEATSHEET.md").exists());
}
