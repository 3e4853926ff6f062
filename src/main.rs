//! paramdoc — report and fix parameters missing from documentation blocks.
//!
//! Reads pre-extracted function descriptions (JSON). Two modes:
//!
//! - **stdin mode**: `paramdoc < functions.json`
//! - **file mode**: `paramdoc --fix src/*.json`

use anyhow::{Context, Result};
use clap::Parser;
use paramdoc::input;
use paramdoc::render::{self, FunctionReport};
use paramdoc::{Config, RequireParam, SourceDocument};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "paramdoc",
    about = "Report and fix parameters missing from documentation blocks"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Rule configuration file (JSON)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format: text (default), json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Insert missing entries. Rewrites input files in place; in stdin
    /// mode the fixed document goes to stdout and the report to stderr.
    #[arg(long)]
    fix: bool,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let rule = RequireParam::new(&config);

    if cli.files.is_empty() {
        return stdin_mode(&cli, &rule);
    }

    file_mode(&cli, &rule)
}

/// Log to stderr, filtered by `PARAMDOC_LOG` (default `warn`).
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("PARAMDOC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// stdin mode: read one document from stdin.
fn stdin_mode(cli: &Cli, rule: &RequireParam) -> Result<ExitCode> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("failed to read stdin")?;

    let mut doc = input::parse(&content, "<stdin>")?;
    let reports = check_document(rule, "<stdin>", &mut doc, cli.fix);
    let renderer = render::create_renderer(&cli.format)?;

    if cli.fix {
        print!("{}", input::to_json(&doc)?);
        eprint!("{}", renderer.render(&reports));
    } else {
        print!("{}", renderer.render(&reports));
    }
    Ok(exit_code(&reports))
}

/// file mode: check every input file, rewriting fixed ones in place.
fn file_mode(cli: &Cli, rule: &RequireParam) -> Result<ExitCode> {
    let renderer = render::create_renderer(&cli.format)?;
    let input_files = expand_globs(&cli.files)?;

    let mut reports = Vec::new();
    for path in &input_files {
        let mut doc = match input::load(path) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("skipping {}: {:#}", path.display(), anyhow::Error::from(e));
                continue;
            }
        };

        let source = path.to_string_lossy().to_string();
        let found = check_document(rule, &source, &mut doc, cli.fix);
        if found.iter().any(|r| r.fixed) {
            let fixed = input::to_json(&doc)
                .with_context(|| format!("not rewriting {}", path.display()))?;
            fs::write(path, fixed)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!(file = %source, "wrote fixed document");
        }
        reports.extend(found);
    }

    print!("{}", renderer.render(&reports));
    Ok(exit_code(&reports))
}

/// Run the rule over every function of `doc`, applying fixes when asked.
fn check_document(
    rule: &RequireParam,
    source: &str,
    doc: &mut SourceDocument,
    fix: bool,
) -> Vec<FunctionReport> {
    let mut reports = Vec::new();
    for func in &mut doc.functions {
        let diagnostics = rule.check_function(func);
        if diagnostics.is_empty() {
            continue;
        }

        let mut fixed = false;
        if fix {
            if let Some(batch) = diagnostics.first().and_then(|d| d.fix.as_ref()) {
                batch.apply(&mut func.tags);
                fixed = true;
            }
        }

        reports.push(FunctionReport {
            source: source.to_string(),
            function: func.name.clone(),
            line: func.line,
            diagnostics,
            fixed,
        });
    }
    reports
}

/// Failure while any reported function is left unfixed.
fn exit_code(reports: &[FunctionReport]) -> ExitCode {
    if has_unfixed(reports) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn has_unfixed(reports: &[FunctionReport]) -> bool {
    reports.iter().any(|r| !r.fixed)
}

/// Expand glob patterns into a list of real file paths.
/// Bare directories are scanned (non-recursively) for `.json` files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("json") {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}
