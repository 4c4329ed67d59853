//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cheatsheet_catalog::Catalog;
use cheatsheet_pdf::{FontSources, PdfConverter, TypstConverter};
use cheatsheet_render::{render_html, render_markdown};

use crate::config::{OutputSettings, Settings, CONFIG_FILE};
use crate::output::{self, find_project_root, Artifact, CheckOutcome};

#[derive(Parser)]
#[command(name = "rcm-cheatsheet")]
#[command(
    author,
    version,
    about = "Generate the Role Context Manager cheatsheet (PDF + Markdown)",
    long_about = None
)]
struct Cli {
    /// Directory receiving the artifacts (default: plugin root)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path (default: <root>/cheatsheet.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write the HTML document
    #[arg(long)]
    emit_html: bool,

    /// Do not render the PDF
    #[arg(long)]
    skip_pdf: bool,

    /// Verify the Markdown on disk is current without writing anything
    #[arg(long)]
    check: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Options shared by the generate and check commands
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub output_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub emit_html: bool,
    pub skip_pdf: bool,
}

/// Where each artifact goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    pub dir: PathBuf,
    /// `None` when PDF rendering is skipped
    pub pdf: Option<PathBuf>,
    pub markdown: PathBuf,
    /// `Some` when the HTML document is requested
    pub html: Option<PathBuf>,
}

impl OutputPlan {
    /// Plan for `dir` using the configured file names
    pub fn new(dir: PathBuf, settings: &OutputSettings) -> Self {
        Self {
            pdf: Some(dir.join(&settings.pdf_name)),
            markdown: dir.join(&settings.markdown_name),
            html: settings.html.then(|| dir.join(&settings.html_name)),
            dir,
        }
    }

    /// Drop the PDF artifact
    pub fn without_pdf(mut self) -> Self {
        self.pdf = None;
        self
    }

    /// Add the HTML artifact
    pub fn with_html(mut self, settings: &OutputSettings) -> Self {
        self.html = Some(self.dir.join(&settings.html_name));
        self
    }
}

/// Files written by one [`generate`] run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub pdf: Option<Artifact>,
    pub markdown: Artifact,
    pub html: Option<Artifact>,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the generate or check command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to determine the working directory")?;
    let options = GenerateOptions {
        output_dir: cli.output_dir,
        config: cli.config,
        emit_html: cli.emit_html,
        skip_pdf: cli.skip_pdf,
    };

    if cli.check {
        check_command(&options, &cwd)
    } else {
        generate_command(&options, &cwd).map(|_| ())
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // A subscriber may already be installed when embedded in another binary
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load settings and work out the output plan for `cwd`
pub fn resolve(options: &GenerateOptions, cwd: &Path) -> Result<(Settings, OutputPlan)> {
    let root = find_project_root(cwd);

    let config_path = match &options.config {
        Some(path) => Some(cwd.join(path)),
        None => Some(root.join(CONFIG_FILE)).filter(|p| p.is_file()),
    };
    let settings = match config_path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            Settings::load(&path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?
        }
        None => Settings::default(),
    };

    let dir = match (&options.output_dir, &settings.output.dir) {
        (Some(dir), _) => cwd.join(dir),
        (None, Some(dir)) => dir.clone(),
        (None, None) => root,
    };
    debug!(dir = %dir.display(), "output directory resolved");

    let mut plan = OutputPlan::new(dir, &settings.output);
    if options.emit_html {
        plan = plan.with_html(&settings.output);
    }
    if options.skip_pdf {
        plan = plan.without_pdf();
    }
    Ok((settings, plan))
}

/// Execute the generate command
pub fn generate_command(options: &GenerateOptions, cwd: &Path) -> Result<GenerationReport> {
    let (settings, plan) = resolve(options, cwd)?;

    let converter = if plan.pdf.is_some() {
        let sources = FontSources {
            files: settings.pdf.fonts,
            dirs: settings.pdf.font_dirs,
            system: settings.pdf.system_fonts,
        };
        TypstConverter::from_sources(sources).context("Failed to resolve fonts")?
    } else {
        TypstConverter::new()
    };
    info!(
        fonts = converter.sources().files.len(),
        system = converter.sources().system,
        "pdf converter ready"
    );

    generate(cheatsheet_catalog::catalog(), &converter, &plan)
}

/// Render every planned artifact and write it to disk
///
/// Prints the progress report on stdout. The PDF is written before the
/// Markdown; a failure stops the run and leaves earlier files in place.
pub fn generate(
    catalog: &Catalog,
    converter: &dyn PdfConverter,
    plan: &OutputPlan,
) -> Result<GenerationReport> {
    println!("Generating {} Cheatsheet...", catalog.plugin);
    println!();

    output::ensure_dir(&plan.dir)?;

    println!("[1/2] Creating PDF content...");
    let pdf = match &plan.pdf {
        Some(path) => {
            println!("Converting to PDF at {}...", path.display());
            let bytes = converter
                .render(catalog)
                .context("Failed to render the PDF")?;
            let artifact = output::write_artifact(path, &bytes)?;
            println!("✓ PDF generated!");
            println!("  Location: {}", artifact.path.display());
            println!("  File size: {}", artifact.size_mb());
            Some(artifact)
        }
        None => {
            println!("  Skipped (--skip-pdf)");
            None
        }
    };

    let html = match &plan.html {
        Some(path) => {
            let artifact = output::write_artifact(path, render_html(catalog).as_bytes())?;
            println!("  HTML: {} ({})", artifact.path.display(), artifact.size_kb());
            Some(artifact)
        }
        None => None,
    };

    println!();
    println!("[2/2] Creating Markdown content...");
    let markdown = output::write_artifact(&plan.markdown, render_markdown(catalog).as_bytes())?;
    println!("✓ Markdown generated!");
    println!("  Location: {}", markdown.path.display());
    println!("  File size: {}", markdown.size_kb());

    println!();
    if pdf.is_some() {
        println!("✓ Both cheatsheets generated successfully!");
    } else {
        println!("✓ Markdown cheatsheet generated successfully!");
    }

    Ok(GenerationReport {
        pdf,
        markdown,
        html,
    })
}

/// Execute the check command
///
/// Fails when the Markdown on disk differs from a fresh render or is missing.
pub fn check_command(options: &GenerateOptions, cwd: &Path) -> Result<()> {
    let (_, plan) = resolve(options, cwd)?;
    let expected = render_markdown(cheatsheet_catalog::catalog());

    match output::check_artifact(&plan.markdown, &expected)? {
        CheckOutcome::Current => {
            println!("✓ {} is up to date", plan.markdown.display());
            Ok(())
        }
        CheckOutcome::Stale => anyhow::bail!(
            "{} is out of date; run rcm-cheatsheet to regenerate it",
            plan.markdown.display()
        ),
        CheckOutcome::Missing => anyhow::bail!(
            "{} not found; run rcm-cheatsheet to generate it",
            plan.markdown.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "rcm-cheatsheet",
            "-o",
            "dist",
            "--emit-html",
            "--skip-pdf",
            "-v",
        ]);
        assert_eq!(cli.output_dir, Some(PathBuf::from("dist")));
        assert!(cli.emit_html);
        assert!(cli.skip_pdf);
        assert!(cli.verbose);
        assert!(!cli.check);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_plan_defaults() {
        let plan = OutputPlan::new(PathBuf::from("/plugin"), &OutputSettings::default());
        assert_eq!(plan.pdf, Some(PathBuf::from("/plugin/CHEATSHEET.pdf")));
        assert_eq!(plan.markdown, PathBuf::from("/plugin/CHEATSHEET.md"));
        assert!(plan.html.is_none());
    }

    #[test]
    fn test_plan_html_from_settings() {
        let settings = OutputSettings {
            html: true,
            ..Default::default()
        };
        let plan = OutputPlan::new(PathBuf::from("/plugin"), &settings).without_pdf();
        assert!(plan.pdf.is_none());
        assert_eq!(plan.html, Some(PathBuf::from("/plugin/CHEATSHEET.html")));
    }
}
