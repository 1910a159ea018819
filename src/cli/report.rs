//! Report command handler.
//!
//! Implements the `report` subcommand: score an answer sheet and write the
//! date-stamped JSON report file.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::cli::{build_session, exit_codes, write_output, OutputTarget};
use crate::report::{create_renderer, ReportFormat};
use crate::scoring::ScoringPolicy;

/// Report command configuration
pub struct ReportFileConfig {
    pub answers_path: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub quiet: bool,
}

/// Run the report command, returning the desired exit code.
///
/// Prints the path of the written report file to stdout.
pub fn run_report(config: ReportFileConfig) -> Result<i32> {
    let session = build_session(
        &config.answers_path,
        config.catalog_path.as_deref(),
        ScoringPolicy::default(),
    )?;

    // An all-rejected or empty sheet produces nothing worth exporting.
    if session.answers().is_empty() {
        bail!(
            "no recognized answers in {}; nothing to export",
            config.answers_path.display()
        );
    }

    let report = session.export_report();

    let dir = config.output_dir.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    let path = dir.join(report.suggested_filename());

    let rendered = create_renderer(ReportFormat::Json, false).render(&report)?;
    write_output(&rendered, &OutputTarget::File(path.clone()), config.quiet)?;
    println!("{}", path.display());

    Ok(exit_codes::SUCCESS)
}
