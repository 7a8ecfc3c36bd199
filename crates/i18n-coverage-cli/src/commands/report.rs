//! Implementation of the coverage report.

use std::env;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use i18n_coverage::{CoverageReport, ScanError, Scanner};
use miette::{miette, IntoDiagnostic, Result};
use tracing::{info, warn};

use crate::output::missing::format_missing;
use crate::output::table::format_coverage_table;
use crate::output::ParseDiagnostic;

/// Arguments for the coverage report.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Directory holding one subdirectory per language. Defaults to
    /// `public/locales` next to the executable.
    #[arg(long, env = "I18N_COVERAGE_LOCALES")]
    pub locales: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// List the keys each incomplete language is missing.
    #[arg(long)]
    pub missing: bool,

    /// Exit with non-zero code if any language is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Follow symlinked directories inside language directories.
    #[arg(long)]
    pub follow_links: bool,
}

/// How the report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Coverage:` header, then `<language>\t<percent>%` per language.
    Plain,
    /// Bordered table with key counts.
    Table,
    /// Pretty-printed JSON array.
    Json,
}

/// Locales directory relative to the executable's own directory.
const DEFAULT_LOCALES_DIR: &str = "public/locales";

/// `public/locales` in the directory holding the running executable.
fn default_locales_root() -> Result<PathBuf> {
    let exe = env::current_exe()
        .into_diagnostic()
        .map_err(|e| miette!("Cannot locate the running executable: {}", e))?;
    let dir = exe
        .parent()
        .ok_or_else(|| miette!("Executable path {} has no parent", exe.display()))?;
    Ok(dir.join(DEFAULT_LOCALES_DIR))
}

/// Run the coverage report.
pub fn run_report(args: ReportArgs) -> Result<i32> {
    let locales = match args.locales {
        Some(path) => path,
        None => default_locales_root()?,
    };
    let scanner = Scanner::builder()
        .root(locales.clone())
        .follow_links(args.follow_links)
        .build();

    let collection = scanner.scan().map_err(scan_failure)?;
    for warning in collection.warnings() {
        warn!("{warning}");
    }
    info!(
        languages = collection.languages().len(),
        files = collection.files_scanned(),
        keys = collection.common().len(),
        "scanned {}",
        locales.display()
    );

    let report = CoverageReport::from_collection(&collection)
        .into_diagnostic()
        .map_err(|e| miette!("Cannot compute coverage for {}: {}", locales.display(), e))?;

    match args.format {
        OutputFormat::Plain => {
            print!("{}", report);
            if args.missing {
                print!("{}", format_missing(&report));
            }
        }
        OutputFormat::Table => {
            println!("{}", format_coverage_table(&report));
            if args.missing {
                print!("{}", format_missing(&report));
            }
        }
        OutputFormat::Json => {
            let json_output = serde_json::to_string_pretty(&report).into_diagnostic()?;
            println!("{}", json_output);
        }
    }

    if args.strict && !report.is_complete() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Turn a scan error into a report, with source context for parse errors.
fn scan_failure(error: ScanError) -> miette::Report {
    match error {
        ScanError::Parse {
            path,
            line,
            column,
            message,
            content,
        } => ParseDiagnostic::new(&path, &content, line, column, &message).into(),
        other => miette!("{}", other),
    }
}
